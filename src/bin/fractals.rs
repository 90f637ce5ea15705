extern crate clap;
extern crate env_logger;
extern crate failure;
extern crate fractals;
#[macro_use]
extern crate log;
extern crate num_cpus;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use fractals::{Fractal, ImageSurface, MandelbrotConfig, NewtonConfig, View};
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr + PartialOrd + Default>(
    s: &str,
    separator: char,
    err: &str,
) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some((l, r)) if l > T::default() && r > T::default() => Ok(()),
        _ => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const NEWTON: &str = "newton";
const MANDELBROT: &str = "mandelbrot";
const OUTPUT: &str = "output";
const SIZE: &str = "size";
const EXTENT: &str = "extent";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const TOLERANCE: &str = "tolerance";
const MAX_Z: &str = "max-z";

fn common_args<'a, 'b>(
    cmd: App<'a, 'b>,
    size: &'a str,
    extent: &'a str,
    iterations: &'a str,
) -> App<'a, 'b> {
    cmd.arg(
        Arg::with_name(OUTPUT)
            .required(true)
            .long(OUTPUT)
            .short("o")
            .takes_value(true)
            .help("Output file; the extension picks the format"),
    )
    .arg(
        Arg::with_name(SIZE)
            .long(SIZE)
            .short("s")
            .takes_value(true)
            .default_value(size)
            .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
            .help("Size of output image, WIDTHxHEIGHT"),
    )
    .arg(
        Arg::with_name(EXTENT)
            .long(EXTENT)
            .short("e")
            .takes_value(true)
            .default_value(extent)
            .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse complex window extent"))
            .help("Width and height of the complex window, centered on the origin"),
    )
    .arg(
        Arg::with_name(THREADS)
            .long(THREADS)
            .short("t")
            .takes_value(true)
            .default_value("1")
            .validator(|s| {
                let max_threads = num_cpus::get();
                validate_range(
                    &s,
                    1,
                    max_threads,
                    "Could not parse thread count",
                    &format!("Thread count must be between 1 and {}", max_threads),
                )
            })
            .help("Number of threads to use in the renderer"),
    )
    .arg(
        Arg::with_name(ITERATIONS)
            .long(ITERATIONS)
            .short("i")
            .takes_value(true)
            .default_value(iterations)
            .validator(|s| {
                validate_range(
                    &s,
                    1,
                    100_000,
                    "Could not parse iteration count",
                    "Iteration count must be between 1 and 100000",
                )
            })
            .help("Maximum number of iterations per pixel"),
    )
}

fn args<'a>(
    newton_size: &'a str,
    newton_extent: &'a str,
    newton_iterations: &'a str,
    mandelbrot_size: &'a str,
    mandelbrot_extent: &'a str,
    mandelbrot_iterations: &'a str,
) -> ArgMatches<'a> {
    let newton = common_args(
        SubCommand::with_name(NEWTON).about("Basins of attraction of z^3 - 1"),
        newton_size,
        newton_extent,
        newton_iterations,
    )
    .arg(
        Arg::with_name(TOLERANCE)
            .long(TOLERANCE)
            .takes_value(true)
            .default_value("1e-6")
            .validator(|s| {
                validate_range(
                    &s,
                    std::f64::MIN_POSITIVE,
                    1.0,
                    "Could not parse tolerance",
                    "Tolerance must be positive and at most 1",
                )
            })
            .help("Residual below which Newton's method stops"),
    );

    let mandelbrot = common_args(
        SubCommand::with_name(MANDELBROT).about("The Mandelbrot set by escape time"),
        mandelbrot_size,
        mandelbrot_extent,
        mandelbrot_iterations,
    )
    .arg(
        Arg::with_name(MAX_Z)
            .long(MAX_Z)
            .short("z")
            .takes_value(true)
            .default_value("5")
            .validator(|s| {
                validate_range(
                    &s,
                    0.0,
                    std::f64::MAX,
                    "Could not parse escape radius",
                    "Escape radius must not be negative",
                )
            })
            .help("Magnitude past which an orbit has escaped"),
    );

    App::new("fractals")
        .version("0.1.0")
        .about("Newton basin and Mandelbrot set renderer")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(newton)
        .subcommand(mandelbrot)
        .get_matches()
}

/// Reads a value clap has already validated and defaulted.
fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T, failure::Error> {
    matches
        .value_of(name)
        .and_then(|s| T::from_str(s).ok())
        .ok_or_else(|| failure::err_msg(format!("Could not parse --{}", name)))
}

fn view(matches: &ArgMatches) -> Result<View, failure::Error> {
    let size = matches.value_of(SIZE).and_then(|s| parse_pair::<usize>(s, 'x'));
    let extent = matches.value_of(EXTENT).and_then(|s| parse_pair::<f64>(s, ','));
    match (size, extent) {
        (Some(size), Some(extent)) => Ok(View {
            pixel_width: size.0,
            pixel_height: size.1,
            complex_width: extent.0,
            complex_height: extent.1,
        }),
        _ => Err(failure::err_msg("Error parsing image dimensions")),
    }
}

fn draw<F: Fractal + Sync>(
    fractal: &F,
    view: &View,
    matches: &ArgMatches,
) -> Result<(), failure::Error> {
    let threads: usize = value(matches, THREADS)?;
    let output: String = value(matches, OUTPUT)?;
    let renderer = view.renderer()?;
    let mut surface = ImageSurface::new(&output, view.pixel_width, view.pixel_height);
    renderer.draw(fractal, &mut surface, threads)?;
    info!("wrote {}", surface.path().display());
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    match matches.subcommand() {
        (NEWTON, Some(sub)) => {
            let config = NewtonConfig {
                view: view(sub)?,
                max_iterations: value(sub, ITERATIONS)?,
                tolerance: value(sub, TOLERANCE)?,
            };
            draw(&config.solver(), &config.view, sub)
        }
        (MANDELBROT, Some(sub)) => {
            let config = MandelbrotConfig {
                view: view(sub)?,
                max_iterations: value(sub, ITERATIONS)?,
                max_z: value(sub, MAX_Z)?,
            };
            draw(&config.evaluator(), &config.view, sub)
        }
        _ => Err(failure::err_msg("No fractal selected")),
    }
}

fn main() {
    env_logger::init();

    let newton = NewtonConfig::default();
    let mandelbrot = MandelbrotConfig::default();
    let newton_size = format!("{}x{}", newton.view.pixel_width, newton.view.pixel_height);
    let newton_extent = format!("{},{}", newton.view.complex_width, newton.view.complex_height);
    let newton_iterations = newton.max_iterations.to_string();
    let mandelbrot_size = format!(
        "{}x{}",
        mandelbrot.view.pixel_width, mandelbrot.view.pixel_height
    );
    let mandelbrot_extent = format!(
        "{},{}",
        mandelbrot.view.complex_width, mandelbrot.view.complex_height
    );
    let mandelbrot_iterations = mandelbrot.max_iterations.to_string();

    let matches = args(
        &newton_size,
        &newton_extent,
        &newton_iterations,
        &mandelbrot_size,
        &mandelbrot_extent,
        &mandelbrot_iterations,
    );

    if let Err(e) = run(&matches) {
        error!("{}", e);
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
