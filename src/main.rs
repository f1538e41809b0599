use rmidjourney::{
    logger::{self, LogLevel, LoggerConfig},
    DescribeRequest, FaceswapRequest, ImagineMode, ImagineRequest, MidjourneyClient,
    MidjourneyConfig, SeedRequest, TaskProgress, UpscaleRequest,
};
use std::env;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_secs(5);
const MAX_POLLS: u32 = 120;

fn usage() -> String {
    [
        "usage: rmidjourney <command> [args]",
        "  imagine <prompt> [fast|turbo]",
        "  result <task-id> [position]",
        "  describe <image-path>",
        "  seed <task-id>",
        "  upscale <task-id> <position>",
        "  faceswap <target-image-url> <face-image-url>",
    ]
    .join("\n")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let level = env::var("RMIDJOURNEY_LOG")
        .ok()
        .and_then(|s| LogLevel::from_env_str(&s))
        .unwrap_or(LogLevel::Info);
    logger::init_with_config(LoggerConfig::new().with_level(level))?;

    if dotenv_loaded {
        log::debug!("✅ .env file loaded");
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        eprintln!("{}", usage());
        std::process::exit(2);
    };

    let config = MidjourneyConfig::from_env();
    logger::log_config_info(&config);
    let client = MidjourneyClient::with_config(config)?;

    match (command.as_str(), &args[1..]) {
        ("imagine", [prompt, rest @ ..]) => {
            let mut request = ImagineRequest::new(prompt.as_str());
            match rest.first().map(String::as_str) {
                Some("fast") => request = request.with_mode(ImagineMode::Fast),
                Some("turbo") => request = request.with_mode(ImagineMode::Turbo),
                Some(other) => return Err(format!("unknown mode: {}", other).into()),
                None => {}
            }

            let task_id = client.imagine(request).await?;
            log::info!("🖼️  Imagine task submitted: {}", task_id);

            let result = wait_for(|| client.imagine_result(&task_id, None)).await?;
            match result.image_url {
                Some(url) => println!("{}", url),
                None => log::warn!("Task finished without an image URL"),
            }
        }
        ("result", [task_id, rest @ ..]) => {
            let position = rest.first().map(|p| p.parse::<u32>()).transpose()?;
            let result = client.imagine_result(task_id, position).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        ("describe", [path]) => {
            let request = DescribeRequest::from_file(path).await?;
            let task_id = client.describe(request).await?;
            log::info!("📝 Describe task submitted: {}", task_id);

            let result = wait_for(|| client.describe_result(&task_id)).await?;
            for line in result.content {
                println!("{}", line);
            }
        }
        ("seed", [task_id]) => {
            let seed_task = client.seed(SeedRequest::new(task_id.as_str())).await?;
            log::info!("🌱 Seed task submitted: {}", seed_task);

            let result = wait_for(|| client.seed_result(&seed_task)).await?;
            println!("{}", result.seed.unwrap_or_default());
        }
        ("upscale", [task_id, position]) => {
            let position: u32 = position.parse()?;
            let url = client
                .upscale(UpscaleRequest::new(task_id.as_str(), position))
                .await?;
            if url.is_empty() {
                let result =
                    wait_for(|| client.imagine_result(task_id, Some(position))).await?;
                println!("{}", result.image_url.unwrap_or_default());
            } else {
                println!("{}", url);
            }
        }
        ("faceswap", [target, face]) => {
            let url = client
                .faceswap(FaceswapRequest::new(target.as_str(), face.as_str()))
                .await?;
            println!("{}", url);
        }
        _ => {
            eprintln!("{}", usage());
            std::process::exit(2);
        }
    }

    Ok(())
}

/// Polls until the task leaves the waiting/running states.
async fn wait_for<T, F, Fut>(mut poll: F) -> rmidjourney::Result<T>
where
    T: TaskProgress,
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = rmidjourney::Result<T>>,
{
    let mut attempts = 0;
    loop {
        let result = poll().await?;
        let state = result.progress();
        attempts += 1;

        if !state.is_pending() || attempts >= MAX_POLLS {
            if state.is_pending() {
                log::warn!("⚠️  Gave up after {} polls", attempts);
            }
            return Ok(result);
        }

        log::info!(
            "⏳ {} ({:.0}%)",
            state.status.as_ref().map_or("unknown", |s| s.as_str()),
            state.percentage
        );
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}
