use std::time::Duration;

use clap::{Parser, Subcommand};
use slideshot_core::{render_html, RenderOptions, Viewport};

#[derive(Parser)]
#[command(name = "slideshot", about = "Render HTML into carousel slide PNGs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an HTML file into a PNG slide
    Render {
        /// The HTML file to render (use - for stdin)
        file: String,

        /// Output PNG path
        #[arg(long, short = 'o', default_value = "slide.png")]
        out: String,

        /// Viewport size as WxH (default: 1080x1350)
        #[arg(long, default_value = "1080x1350")]
        viewport: String,

        /// Device scale factor
        #[arg(long, default_value_t = 2.0)]
        scale: f64,

        /// Content load timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout: u64,
    },
}

fn parse_viewport(s: &str) -> Viewport {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() == 2 {
        let width = parts[0].parse().unwrap_or(1080);
        let height = parts[1].parse().unwrap_or(1350);
        Viewport { width, height }
    } else {
        Viewport::default()
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            file,
            out,
            viewport,
            scale,
            timeout,
        } => {
            let html = if file == "-" {
                use std::io::Read;
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .expect("Failed to read stdin");
                buf
            } else {
                std::fs::read_to_string(&file).expect("Failed to read file")
            };

            let options = RenderOptions {
                viewport: parse_viewport(&viewport),
                scale,
                load_timeout: Duration::from_secs(timeout),
                ..Default::default()
            };

            match render_html(&html, &options) {
                Ok(slide) => {
                    let (w, h) = (slide.physical_width(), slide.physical_height());
                    std::fs::write(&out, &slide.png).expect("Failed to write output");
                    println!("{out} ({w}x{h})");
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
