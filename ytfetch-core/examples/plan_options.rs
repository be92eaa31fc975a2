use std::env;

use ytfetch_core::config::{DownloadConfigBuilder, OutputFormat, Quality};
use ytfetch_core::{ProcessRunner, build_options, format_line, is_transcoder_available, list_formats};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Show the yt-dlp arguments a few requests map to
    println!("Example 1: Option mapping");
    let transcoder = is_transcoder_available();
    println!("FFmpeg available: {}", transcoder);

    let requests = [
        (Quality::MaxHeight(720), OutputFormat::Mp4, false),
        (Quality::Best, OutputFormat::Mkv, false),
        (Quality::Best, OutputFormat::Mp3, true),
    ];
    for (quality, format, audio_only) in requests {
        let config = DownloadConfigBuilder::new()
            .url("https://example.com/watch?v=demo")
            .quality(quality)
            .format(format)
            .audio_only(audio_only)
            .build()?;
        let plan = build_options(&config, transcoder);
        println!("{quality} {format} audio_only={audio_only}");
        println!("  args: {}", plan.options.to_args().join(" "));
        for warning in &plan.warnings {
            println!("  warning: {warning}");
        }
    }

    // Example 2: List formats for a URL given on the command line
    if let Some(url) = env::args().nth(1) {
        println!("\nExample 2: Formats for {url}");
        let runner = ProcessRunner::from_env();
        for format in list_formats(&runner, &url)? {
            println!("{}", format_line(&format));
        }
    }

    Ok(())
}
