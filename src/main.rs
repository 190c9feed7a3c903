use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use user_posts::app::viewer::CommandOutcome;
use user_posts::utils::error::ErrorSeverity;
use user_posts::utils::{logger, validation::Validate};
use user_posts::{CliConfig, Command, LocalStorage, PostViewer, Settings, ViewerError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting user-posts CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 合併並驗證配置
    let settings = match Settings::resolve(&config).and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    match run(&config, &settings).await {
        Ok(()) => {
            tracing::info!("✅ Done");
        }
        Err(e) => {
            tracing::error!(
                "❌ Rendering failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run(config: &CliConfig, settings: &Settings) -> Result<(), ViewerError> {
    let viewer = PostViewer::from_settings(settings);
    viewer.start().await?;

    if config.interactive {
        interactive_loop(&viewer).await?;
    } else {
        viewer.select_user(config.user.as_deref()).await?;
        for post_id in &config.toggle {
            viewer.toggle(*post_id).await;
        }
    }

    match &settings.output_path {
        Some(path) => {
            let storage = LocalStorage::new(".");
            viewer.save(&storage, path).await?;
            tracing::info!("📁 Page saved to: {}", path);
        }
        None if !config.interactive => println!("{}", viewer.html().await),
        None => {}
    }

    Ok(())
}

async fn interactive_loop(viewer: &PostViewer<user_posts::HttpGateway>) -> Result<(), ViewerError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    eprintln!("Commands: select <id>, toggle <post id>, show, quit");

    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                continue;
            }
        };

        match viewer.execute(command).await? {
            CommandOutcome::Selected(Some(outcome)) => {
                eprintln!("👤 User {}: {} posts", outcome.user_id, outcome.post_count);
            }
            CommandOutcome::Selected(None) => eprintln!("Menu is not ready yet"),
            CommandOutcome::Toggled(Some(toggle)) => {
                eprintln!("{}", toggle.button_label.unwrap_or_default());
            }
            CommandOutcome::Toggled(None) => eprintln!("No such post on the page"),
            CommandOutcome::Html(html) => println!("{}", html),
            CommandOutcome::Quit => break,
        }
    }

    Ok(())
}
