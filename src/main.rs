use std::path::PathBuf;

use clap::Parser;
use fractal_demos::{
    Complex, DemoVariant, PpmFilePresenter, StillRenderController, StillRenderRequest,
};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "fractal_demos")]
#[command(about = "Render animated fractal demo frames to PPM images")]
struct Args {
    /// Demo preset: mandelbrot, julia or blend
    #[arg(short, long, default_value_t = DemoVariant::default())]
    variant: DemoVariant,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Animation time of the first frame, in seconds
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    time: f64,

    /// Camera pan offset, real part
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    offset_x: f64,

    /// Camera pan offset, imaginary part
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    offset_y: f64,

    /// Number of frames; more than one writes a numbered sequence
    #[arg(short, long, default_value_t = 1)]
    frames: u32,

    /// Frame rate used to space sequence frames in time
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    #[arg(short, long, default_value = "output/fractal.ppm")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fractal_demos::init_logging();

    let args = Args::parse();
    let config = args.variant.config();

    info!(variant = %args.variant, title = args.variant.display_name(), "starting");

    let request = StillRenderRequest {
        width: args.width,
        height: args.height,
        start_seconds: args.time,
        camera_offset: Complex::new(args.offset_x, args.offset_y),
        frames: args.frames,
        fps: args.fps,
    };

    let controller = StillRenderController::new(PpmFilePresenter::new(), &config)?;
    let written = controller.render_sequence(&request, &args.output)?;

    for path in &written {
        println!("{}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_render_one_mandelbrot_frame() {
        let args = Args::parse_from(["fractal_demos"]);

        assert_eq!(args.variant, DemoVariant::Mandelbrot);
        assert_eq!((args.width, args.height), (800, 600));
        assert_eq!(args.frames, 1);
        assert_eq!(args.output, PathBuf::from("output/fractal.ppm"));
    }

    #[test]
    fn negative_offsets_parse() {
        let args = Args::parse_from([
            "fractal_demos",
            "--variant",
            "blend",
            "--offset-x",
            "-0.25",
            "--offset-y",
            "0.5",
        ]);

        assert_eq!(args.variant, DemoVariant::Blend);
        assert_eq!(args.offset_x, -0.25);
        assert_eq!(args.offset_y, 0.5);
    }

    #[test]
    fn unknown_variant_is_a_parse_error() {
        assert!(Args::try_parse_from(["fractal_demos", "--variant", "newton"]).is_err());
    }
}
