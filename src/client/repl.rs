//! The interactive command loop: render the full collection, apply one
//! command, re-fetch after every mutation.

use std::io::Write;

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use super::api::{ApiClient, ClientError, Note};
use super::form::{NoteForm, Submission};

pub async fn run(client: &ApiClient) -> Result<(), ClientError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut form = NoteForm::new();

    let mut notes = refresh(client).await?;
    print_help();

    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (Some("list"), None) => {
                notes = refresh(client).await?;
            }
            (Some("add"), None) => {
                prompt_fields(&mut lines, &mut form).await?;
                if submit(client, &mut form).await {
                    notes = refresh(client).await?;
                }
            }
            (Some("edit"), Some(n)) => {
                let Some(note) = lookup(&notes, n) else {
                    println!("{}", "No such note.".yellow());
                    continue;
                };
                form.begin_edit(note.id.clone(), note.title.clone(), note.content.clone());
                prompt_fields(&mut lines, &mut form).await?;
                if submit(client, &mut form).await {
                    notes = refresh(client).await?;
                }
            }
            (Some("delete"), Some(n)) => {
                let Some(note) = lookup(&notes, n) else {
                    println!("{}", "No such note.".yellow());
                    continue;
                };
                match client.delete(&note.id).await {
                    Ok(message) => println!("{}", message.green()),
                    Err(e) => println!("{}", e.to_string().red()),
                }
                notes = refresh(client).await?;
            }
            (Some("help"), None) => print_help(),
            (Some("quit") | Some("exit"), None) => break,
            (None, _) => {}
            _ => println!("{}", "Unknown command, try `help`.".yellow()),
        }
    }

    Ok(())
}

/// Read both fields, keeping the current form value when the input is blank
/// (edit mode pre-fills the form with the note's current values).
async fn prompt_fields(
    lines: &mut Lines<BufReader<Stdin>>,
    form: &mut NoteForm,
) -> Result<(), ClientError> {
    println!("--- {} ---", form.submit_label());
    let title = prompt_field(lines, "Title", form.title()).await?;
    let content = prompt_field(lines, "Content", form.content()).await?;
    form.set_fields(title, content);
    Ok(())
}

async fn prompt_field(
    lines: &mut Lines<BufReader<Stdin>>,
    label: &str,
    current: &str,
) -> Result<String, ClientError> {
    if current.is_empty() {
        print!("{label}: ");
    } else {
        print!("{label} [{current}]: ");
    }
    std::io::stdout().flush()?;

    let input = lines.next_line().await?.unwrap_or_default();
    let input = input.trim();
    if input.is_empty() {
        Ok(current.to_string())
    } else {
        Ok(input.to_string())
    }
}

/// Send the form's action, returning whether a request was actually made.
/// Failures are printed, not swallowed; the form only resets on success, so a
/// failed update stays in edit mode.
async fn submit(client: &ApiClient, form: &mut NoteForm) -> bool {
    match form.submission() {
        None => {
            println!("{}", "Both title and content are required!".yellow());
            return false;
        }
        Some(Submission::Create { title, content }) => {
            match client.create(&title, &content).await {
                Ok(note) => {
                    println!("{}", format!("Added \"{}\".", note.title).green());
                    form.clear();
                }
                Err(e) => println!("{}", e.to_string().red()),
            }
        }
        Some(Submission::Update { id, title, content }) => {
            match client.update(&id, &title, &content).await {
                Ok(note) => {
                    println!("{}", format!("Updated \"{}\".", note.title).green());
                    form.clear();
                }
                Err(e) => println!("{}", e.to_string().red()),
            }
        }
    }
    true
}

async fn refresh(client: &ApiClient) -> Result<Vec<Note>, ClientError> {
    let notes = client.list().await?;
    render(&notes);
    Ok(notes)
}

fn render(notes: &[Note]) {
    if notes.is_empty() {
        println!("No notes yet.");
        return;
    }

    for (i, note) in notes.iter().enumerate() {
        println!("{} {}", format!("{}.", i + 1).yellow(), note.title.bold());
        println!("   {}", note.content);
    }
}

fn lookup<'a>(notes: &'a [Note], n: &str) -> Option<&'a Note> {
    let n: usize = n.parse().ok()?;
    notes.get(n.checked_sub(1)?)
}

fn print_help() {
    println!(
        "{}",
        "commands: list | add | edit <n> | delete <n> | help | quit".dimmed()
    );
}
