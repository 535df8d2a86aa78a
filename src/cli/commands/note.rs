use crate::cli::parser::NoteAction;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::note::Note;
use crate::store::Store;
use crate::ui::messages::{success, warning};
use crate::utils::formatting::truncate;
use crate::utils::table::{Column, Table};

pub fn handle(action: &NoteAction, cfg: &Config) -> AppResult<()> {
    let mut store = Store::open(cfg);

    match action {
        NoteAction::Add { content } => {
            if store.add_note(content) {
                success("Note added.");
            } else {
                warning("Note content must not be empty.");
            }
        }

        NoteAction::List => print_list(&store),

        NoteAction::Edit { id, content } => {
            if store.update_note(*id, content) {
                success(format!("Note {id} updated."));
            } else {
                warning(format!("No text note with id {id}"));
            }
        }

        NoteAction::Del { id } => {
            if store.delete_note(*id) {
                success(format!("Note {id} deleted."));
            } else {
                warning(format!("No note with id {id}"));
            }
        }

        NoteAction::Clear { yes } => {
            if !*yes {
                warning("This deletes every note. Re-run with --yes to confirm.");
            } else {
                store.clear_all_notes();
                success("All notes deleted.");
            }
        }
    }

    Ok(())
}

fn print_list(store: &Store) {
    let notes = &store.state().notes;

    if notes.is_empty() {
        println!("No notes yet. Add one with 'note add <content>'.");
        return;
    }

    let mut table = Table::new(vec![
        Column {
            header: "ID".to_string(),
            width: 13,
        },
        Column {
            header: "KIND".to_string(),
            width: 4,
        },
        Column {
            header: "CONTENT".to_string(),
            width: 44,
        },
    ]);

    for note in notes {
        match note {
            Note::Text { id, content, .. } => {
                table.add_row(vec![
                    id.to_string(),
                    "text".to_string(),
                    truncate(content, 44),
                ]);
            }
            Note::Todo {
                id, title, items, ..
            } => {
                let done = items.iter().filter(|i| i.completed).count();
                table.add_row(vec![
                    id.to_string(),
                    "todo".to_string(),
                    format!("{} ({}/{} done)", truncate(title, 30), done, items.len()),
                ]);
            }
        }
    }

    print!("{}", table.render());
}
