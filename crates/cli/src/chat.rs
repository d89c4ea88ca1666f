use crate::session::{export_file_name, Session, QUICK_QUERIES};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

const HELP: &str = "Commands: /quick [N], /stats, /clear, /export, /quit";

/// Line-oriented chat loop. Returns when input ends or on `/quit`.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut output: W,
    export_dir: &Path,
) -> Result<()> {
    writeln!(output, "🤖 HR Assistant. Ask about leave, benefits or workplace policy.")?;
    writeln!(output, "{HELP}")?;
    for line in input.lines() {
        let line = line.context("read chat input")?;
        let query = line.trim();
        match query {
            "/quit" | "/exit" => break,
            "/help" => writeln!(output, "{HELP}")?,
            "/clear" => {
                session.clear();
                writeln!(output, "Conversation cleared.")?;
            }
            "/quick" => {
                for (i, q) in QUICK_QUERIES.iter().enumerate() {
                    writeln!(output, "{}. {}", i + 1, q)?;
                }
            }
            "/stats" => {
                let stats = session.stats();
                writeln!(output, "Total queries: {}", stats.total_queries)?;
                for (intent, count) in &stats.by_intent {
                    writeln!(output, "  {intent}: {count}")?;
                }
                writeln!(
                    output,
                    "Engagement: {:.0}% - {}",
                    stats.engagement, stats.engagement_label
                )?;
            }
            "/export" => {
                if session.messages().is_empty() {
                    writeln!(output, "Nothing to export yet.")?;
                } else {
                    let path = export(session, export_dir)?;
                    writeln!(output, "Saved conversation to {}", path.display())?;
                }
            }
            _ if query.starts_with("/quick ") => {
                let picked = query["/quick ".len()..]
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| QUICK_QUERIES.get(i));
                match picked {
                    Some(quick) => {
                        writeln!(output, "> {quick}")?;
                        if let Some(response) = session.ask(quick) {
                            writeln!(output, "\n{response}\n")?;
                        }
                    }
                    None => writeln!(
                        output,
                        "Pick a quick query between 1 and {}.",
                        QUICK_QUERIES.len()
                    )?,
                }
            }
            _ => {
                if let Some(response) = session.ask(query) {
                    writeln!(output, "\n{response}\n")?;
                }
            }
        }
        output.flush()?;
    }
    Ok(())
}

pub fn export(session: &Session, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(export_file_name(&chrono::Local::now()));
    std::fs::write(&path, session.transcript())
        .with_context(|| format!("write transcript to {:?}", path))?;
    info!("Exported {} messages to {:?}", session.messages().len(), path);
    Ok(path)
}
