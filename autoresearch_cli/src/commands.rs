use anyhow::{bail, Result};
use autoresearch_client::{save_paper, save_report, ChatTranscript, Orchestrator, SessionStore};
use autoresearch_types::RunId;
use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::display;

const CHAT_HELP: &str = "Ask a question about your research. Commands: /save, /new <topic>, /quit";

/// Drive one run to completion, applying its events to `store`.
async fn run_into(orchestrator: &Orchestrator, topic: &str, store: &mut SessionStore) -> Result<RunId> {
    let mut handle = orchestrator.spawn_run(topic)?;
    store.begin(handle.run);

    while let Some(event) = handle.events.recv().await {
        display::print_event(&event);
        store.apply(event);
    }

    if store.is_busy() {
        bail!("Research run {} ended without a result", handle.run);
    }
    Ok(handle.run)
}

async fn save_all(store: &SessionStore, out: &Path) -> Result<()> {
    let Some(session) = store.session().filter(|_| store.can_download()) else {
        println!("Nothing to save yet.");
        return Ok(());
    };

    let report = save_report(session, out).await?;
    println!("Saved report to {}", report.display());
    for paper in &session.papers {
        let path = save_paper(paper, out).await?;
        println!("Saved paper to {}", path.display());
    }
    Ok(())
}

pub async fn research(orchestrator: &Orchestrator, topic: &str, out: Option<&Path>) -> Result<()> {
    let mut store = SessionStore::new();
    run_into(orchestrator, topic, &mut store).await?;

    if let Some(session) = store.session() {
        display::print_session(session);
    }
    if let Some(out) = out {
        println!();
        save_all(&store, out).await?;
    }
    Ok(())
}

pub async fn chat(orchestrator: &Orchestrator, topic: &str, out: &Path) -> Result<()> {
    let backend = orchestrator.backend();
    let mut store = SessionStore::new();
    let mut transcript = ChatTranscript::new();

    let run = run_into(orchestrator, topic, &mut store).await?;
    transcript.attach(run);
    if let Some(session) = store.session() {
        display::print_session(session);
    }
    println!("\n{CHAT_HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "" => continue,
            "/quit" | "/exit" => break,
            "/save" => save_all(&store, out).await?,
            "/help" => println!("{CHAT_HELP}"),
            command if command.starts_with("/new") => {
                let topic = command.trim_start_matches("/new").trim();
                if topic.is_empty() {
                    println!("Usage: /new <topic>");
                    continue;
                }
                let run = run_into(orchestrator, topic, &mut store).await?;
                transcript.attach(run);
                if let Some(session) = store.session() {
                    display::print_session(session);
                }
            }
            input => {
                if let Some(reply) = transcript.send(backend.as_ref(), input, store.session()).await {
                    display::print_reply(reply);
                }
            }
        }
    }

    Ok(())
}
