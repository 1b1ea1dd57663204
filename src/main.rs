use std::io::{self, BufRead, Write};
use std::sync::Arc;

use hf_checkin::catalog::default_flow;
use hf_checkin::{CheckInSession, EngineConfig, Message, MessageOrigin, Question, VitalsSample};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    eprintln!("🏥 Health Check-In v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Answer with a choice number or free text. Ctrl-D to quit.\n");

    let catalog = Arc::new(default_flow::catalog());
    let mut session = CheckInSession::new(catalog, EngineConfig::default())?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut printed = print_new(&session, 0);

    while let Some(question) = session.current_question().cloned() {
        let pending = match prompt_for(&question, &mut lines)? {
            Some(input) => match input {
                Input::BloodPressure(sample) => {
                    session.submit_blood_pressure(&question.id, &sample)?
                }
                Input::Weight(sample) => session.submit_weight(&question.id, &sample)?,
                Input::Text(text) => {
                    if question.requires_input {
                        match session.submit_text(&question.id, &text) {
                            Ok(pending) => pending,
                            Err(e) => {
                                eprintln!("   {e}");
                                continue;
                            }
                        }
                    } else {
                        session.submit_choice(&question.id, &text)?
                    }
                }
            },
            None => break, // EOF
        };

        session.emit_paced(pending).await;
        printed = print_new(&session, printed);
    }

    if session.is_complete() {
        eprintln!("\nRecorded {} responses. Goodbye!", session.responses().len());
    }
    Ok(())
}

enum Input {
    Text(String),
    BloodPressure(VitalsSample),
    Weight(VitalsSample),
}

/// Read one answer for the current question, mapping vitals questions to
/// their slider-equivalent numeric prompts.
fn prompt_for(
    question: &Question,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<Option<Input>> {
    if question.id == "bp_reading" {
        let Some(line) = read_line("systolic/diastolic (e.g. 120/80)> ", lines)? else {
            return Ok(None);
        };
        let mut sample = VitalsSample::default();
        if let Some((sys, dia)) = line.split_once('/') {
            sample.systolic = sys.trim().parse().unwrap_or(sample.systolic);
            sample.diastolic = dia.trim().parse().unwrap_or(sample.diastolic);
        }
        return Ok(Some(Input::BloodPressure(sample)));
    }

    if question.id == "current_weight" {
        let Some(line) = read_line("weight-kg height-cm (e.g. 70 170)> ", lines)? else {
            return Ok(None);
        };
        let mut sample = VitalsSample::default();
        let mut parts = line.split_whitespace();
        if let Some(w) = parts.next() {
            sample.weight_kg = w.parse().unwrap_or(sample.weight_kg);
        }
        if let Some(h) = parts.next() {
            sample.height_cm = h.parse().unwrap_or(sample.height_cm);
        }
        return Ok(Some(Input::Weight(sample)));
    }

    let Some(line) = read_line("> ", lines)? else {
        return Ok(None);
    };

    // A bare number picks the corresponding choice.
    if let Ok(n) = line.trim().parse::<usize>() {
        if n >= 1 && n <= question.answers.len() {
            return Ok(Some(Input::Text(question.answers[n - 1].clone())));
        }
    }
    Ok(Some(Input::Text(line)))
}

fn read_line(
    prompt: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<Option<String>> {
    loop {
        eprint!("{prompt}");
        io::stderr().flush()?;
        match lines.next() {
            Some(line) => {
                let line = line?;
                if !line.trim().is_empty() {
                    return Ok(Some(line.trim().to_string()));
                }
            }
            None => return Ok(None),
        }
    }
}

/// Print transcript messages appended since the last call.
fn print_new(session: &CheckInSession, printed: usize) -> usize {
    for message in &session.transcript()[printed..] {
        render(message);
    }
    session.transcript().len()
}

fn render(message: &Message) {
    match message.origin {
        MessageOrigin::Bot => {
            if let Some(category) = &message.category {
                eprintln!("\n[{category}]");
            }
            eprintln!("🤖 {}", message.text);
            if !message.choices.is_empty() {
                for (i, choice) in message.choices.iter().enumerate() {
                    eprintln!("   {}. {choice}", i + 1);
                }
            }
        }
        MessageOrigin::User => eprintln!("🧑 {}", message.text),
    }
}
