use gridlocator::{decode, encode, version, Coordinates};
use std::{env, error::Error, process};

fn usage() -> ! {
    eprintln!(
        "Usage: ./{} <locator> | <latitude> <longitude>",
        version::name()
    );
    process::exit(2);
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [flag] if flag == "--version" => {
            println!("{} {}", version::name(), version::version().unwrap_or("unknown"));
        }
        [locator] => {
            log::debug!("decoding grid location {:?}", locator);
            let coordinates = decode(locator)?;
            println!("{:12} {}", "Latitude", coordinates.latitude);
            println!("{:12} {}", "Longitude", coordinates.longitude);
        }
        [latitude, longitude] => {
            let coordinates = Coordinates::new(latitude.parse()?, longitude.parse()?);
            log::debug!("encoding coordinates {}", coordinates);
            println!("{}", encode(&coordinates)?);
        }
        _ => usage(),
    }

    Ok(())
}
