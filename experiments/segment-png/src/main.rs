use phonetag_base::{Tensor, log};
use phonetag_image::encode_png_async;
use phonetag_segment::{DECODE_THREADS, ExecutionReport, SegmenterConfig, segment};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, PartialEq)]
struct Args {
    tensor_path: PathBuf,
    output_path: PathBuf,
    config_path: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Option<Args> {
    if args.len() < 3 || args.len() > 4 {
        return None;
    }
    Some(Args {
        tensor_path: PathBuf::from(&args[1]),
        output_path: PathBuf::from(&args[2]),
        config_path: args.get(3).map(PathBuf::from),
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // PHONETAG_LOG_DIR switches logging to daily files in that directory
    match std::env::var_os("PHONETAG_LOG_DIR") {
        Some(dir) => phonetag_base::init_file_logger(dir)?,
        None => phonetag_base::init_stdout_logger(),
    }

    let argv: Vec<String> = std::env::args().collect();
    let Some(args) = parse_args(&argv) else {
        eprintln!("Usage: {} <scores.f32> <mask.png> [config.json]", argv[0]);
        std::process::exit(1);
    };

    let config = match &args.config_path {
        Some(path) => SegmenterConfig::from_json_file(path)?,
        None => SegmenterConfig::default(),
    };
    let size = config.image_size;
    let started = Instant::now();

    // raw little-endian [size, size, classes] scores, as dumped from the model output
    let bytes = std::fs::read(&args.tensor_path)?;
    let scores = Tensor::from_le_bytes(vec![size, size, config.num_classes], &bytes)?;
    log::info!(
        "Loaded {:?}: {}x{}x{} scores",
        args.tensor_path,
        size,
        size,
        config.num_classes
    );

    let palette = config.palette()?;
    let preprocess = started.elapsed();

    let decode_started = Instant::now();
    let segmentation = segment(&scores.data, size, &palette, config.highlight_class)?;
    let decode = decode_started.elapsed();

    let highlighted = segmentation
        .mask
        .count_where(|p| !p.is_transparent());
    let items_found = segmentation.items_found(&palette);

    let png = encode_png_async(segmentation.mask).await?;
    std::fs::write(&args.output_path, png)?;

    // scores come precomputed, so no model runs here
    let report = ExecutionReport {
        image_size: size,
        threads: DECODE_THREADS,
        preprocess,
        inference: Duration::ZERO,
        decode,
        total: started.elapsed(),
        items_found,
    };
    print!("{report}");
    println!("Highlighted pixels: {} / {}", highlighted, size * size);
    println!("Wrote {}", args.output_path.display());
    Ok(())
}
