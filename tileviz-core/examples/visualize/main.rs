use std::process::ExitCode;

use tileviz_core::{generate_batch, render, ShapeDescriptor};

const DEFAULT_SHAPE: &str = "f32[3,5]{1,0:t(2,2)}";

fn main() -> ExitCode {
    env_logger::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        args.push(DEFAULT_SHAPE.to_string());
    }

    let mut descriptors = Vec::with_capacity(args.len());
    let mut requests = Vec::with_capacity(args.len());
    for arg in &args {
        match ShapeDescriptor::parse(arg).and_then(|d| d.to_request().map(|r| (d, r))) {
            Ok((descriptor, request)) => {
                descriptors.push(descriptor);
                requests.push(request);
            }
            Err(err) => {
                eprintln!("{arg}: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    for (descriptor, layout) in descriptors.iter().zip(generate_batch(&requests)) {
        match layout {
            Ok(layout) => println!("{}\n", render::report(descriptor, &layout)),
            Err(err) => {
                eprintln!("{descriptor}: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
