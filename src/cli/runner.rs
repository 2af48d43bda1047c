use tracing::info;

use depthkit::ResizeParams;
use depthkit::api::resize_directory;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if args.scale == 0 {
        return Err(AppError::ZeroScale { scale: args.scale }.into());
    }

    let params = ResizeParams {
        src: args.src,
        dst: args.dst,
        scale: args.scale,
        workers: args.workers,
        recursive: args.recursive,
    };

    info!(
        "Starting batch resize: {:?} -> {:?} (scale {})",
        params.src, params.dst, params.scale
    );

    let report = resize_directory(&params)?;

    if report.total() == 0 {
        println!("No PNG files found. Check the --src path.");
        return Ok(());
    }

    println!(
        "\nDone! Processed {} images -> {:?}",
        report.processed, params.dst
    );
    if report.failed > 0 {
        println!("Failed to process {} images; see warnings above.", report.failed);
    }

    Ok(())
}
