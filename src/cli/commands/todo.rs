use crate::cli::parser::TodoAction;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::note::{Note, TodoItem};
use crate::store::Store;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{GREEN, GREY, RESET};
use crate::utils::time::now_ms;

pub fn handle(action: &TodoAction, cfg: &Config) -> AppResult<()> {
    let mut store = Store::open(cfg);

    match action {
        TodoAction::Add { title, items } => {
            // Pre-build the item sequence; ids are ms-based like every
            // other id, offset so items created together stay unique.
            let now = now_ms();
            let built: Vec<TodoItem> = items
                .iter()
                .enumerate()
                .map(|(i, text)| TodoItem::new(now + i as i64, text))
                .collect();

            if store.add_todo_list(title, built) {
                success(format!("Todo list '{}' added.", title));
            } else {
                warning("Todo list title must not be empty.");
            }
        }

        TodoAction::List => print_list(&store),

        TodoAction::Title { id, title } => {
            if store.update_todo_list_title(*id, title) {
                success(format!("Todo list {id} renamed."));
            } else {
                warning(format!("No todo list with id {id}"));
            }
        }

        TodoAction::ItemAdd { id, text } => {
            if store.add_todo_item(*id, text) {
                success("Item added.");
            } else {
                warning(format!("No todo list with id {id}"));
            }
        }

        TodoAction::Toggle { id, item } => {
            if store.toggle_todo_item(*id, *item) {
                success("Item toggled.");
            } else {
                warning(format!("No item {item} in todo list {id}"));
            }
        }

        TodoAction::ItemEdit { id, item, text } => {
            if store.update_todo_item(*id, *item, text) {
                success("Item updated.");
            } else {
                warning(format!("No item {item} in todo list {id}"));
            }
        }

        TodoAction::ItemDel { id, item } => {
            if store.delete_todo_item(*id, *item) {
                success("Item deleted.");
            } else {
                warning(format!("No item {item} in todo list {id}"));
            }
        }
    }

    Ok(())
}

fn print_list(store: &Store) {
    let todos: Vec<&Note> = store.state().notes.iter().filter(|n| n.is_todo()).collect();

    if todos.is_empty() {
        println!("No todo lists yet. Add one with 'todo add <title>'.");
        return;
    }

    for note in todos {
        if let Note::Todo {
            id, title, items, ..
        } = note
        {
            println!("{id}  {title}");
            for item in items {
                if item.completed {
                    println!("    {GREEN}[x]{RESET} {}  {GREY}({}){RESET}", item.text, item.id);
                } else {
                    println!("    [ ] {}  {GREY}({}){RESET}", item.text, item.id);
                }
            }
        }
    }
}
