mod command;

use anyhow::Result;
use command::{Command, HELP};
use rag_client::{backend_url, render, BackendService, UiController};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let backend = BackendService::new(backend_url());
    log::info!("Using backend at {}", backend.base_url());
    let controller = Arc::new(UiController::new(backend));

    println!("📄 RAG PDF Search ({})", controller.backend().base_url());
    ping(&controller).await;
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match command {
            Command::SelectFile(path) => {
                controller.select_file(path).await;
                println!("{}", render(&controller.snapshot().await));
            }
            Command::Upload => {
                let controller = controller.clone();
                tokio::spawn(async move {
                    controller.upload_document().await;
                    println!("{}", render(&controller.snapshot().await));
                });
            }
            Command::SetQuestion(text) => controller.set_question(text).await,
            Command::Ask(text) => {
                if let Some(text) = text {
                    controller.set_question(text).await;
                }
                let controller = controller.clone();
                tokio::spawn(async move {
                    controller.ask_question().await;
                    println!("{}", render(&controller.snapshot().await));
                });
            }
            Command::Show => println!("{}", render(&controller.snapshot().await)),
            Command::Ping => ping(&controller).await,
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
            Command::Unknown(input) => {
                println!("Unknown command: {}", input);
                println!("{}", HELP);
            }
        }
    }

    log::info!("Session ended");
    Ok(())
}

async fn ping(controller: &UiController) {
    match controller.backend().health().await {
        Ok(health) => println!("✅ {}", health.message),
        Err(e) => {
            log::warn!("Health check failed: {:#}", e);
            println!("⚠️  Backend not reachable at {}", controller.backend().base_url());
        }
    }
}
