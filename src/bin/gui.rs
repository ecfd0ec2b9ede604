use clap::Parser;
use fractal_demos::{DemoVariant, DisplayMode};

#[derive(Debug, Parser)]
#[command(name = "gui")]
#[command(about = "Real-time animated fractal demos")]
struct Args {
    /// Demo preset: mandelbrot, julia or blend
    #[arg(short, long, default_value_t = DemoVariant::default())]
    variant: DemoVariant,

    /// Open a window of --width x --height instead of the preset's display mode
    #[arg(long)]
    windowed: bool,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fractal_demos::init_logging();

    let args = Args::parse();
    let mut config = args.variant.config();

    if args.windowed {
        config.display = DisplayMode::Windowed {
            width: args.width,
            height: args.height,
        };
    }

    fractal_demos::run_gui(config)?;

    Ok(())
}
