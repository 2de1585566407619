extern crate huffman_forest;

use huffman_forest::{CompressionStats, HuffmanCodec, HuffmanError};
use std::io::{self, Error, ErrorKind};
use std::time::Instant;
use std::{env, fs, process};

const USAGE: &str = "usage: runner <input file> <compressed file> <decompressed file>";

fn invalid_data(error: HuffmanError) -> Error {
    Error::new(ErrorKind::InvalidData, error)
}

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [input_path, compressed_path, decompressed_path] = args.as_slice() else {
        eprintln!("{USAGE}");
        process::exit(2);
    };

    println!("Reading input file: \"{input_path}\"...\n");
    let text = fs::read_to_string(input_path)?;
    let symbols: Vec<char> = text.chars().collect();

    let codec = HuffmanCodec::from_symbols(&symbols).map_err(invalid_data)?;
    let frequencies = codec.frequencies();
    println!("Characters and their frequencies:\n---------------------------------");
    print!("{frequencies}");
    println!("\nTotal number of characters in the file: {}", frequencies.total_symbols());
    println!("Number of character types: {}\n", frequencies.distinct_symbols());

    println!("Characters and their encodings:\n-------------------------------");
    print!("{}", codec.table());

    println!("\nCompressing \"{input_path}\" into \"{compressed_path}\"");
    let now = Instant::now();
    let packed = codec.compress(&symbols).map_err(invalid_data)?;
    fs::write(compressed_path, &packed)?;
    log::info!("Compression took {:.6}s", now.elapsed().as_secs_f64());

    println!("Decompressing \"{compressed_path}\" into \"{decompressed_path}\"");
    let now = Instant::now();
    let packed = fs::read(compressed_path)?;
    let restored: String = codec.decompress(&packed).map_err(invalid_data)?.into_iter().collect();
    fs::write(decompressed_path, &restored)?;
    log::info!("Decompression took {:.6}s", now.elapsed().as_secs_f64());

    let stats = CompressionStats::new(text.len(), packed.len());
    println!(
        "\n{} bytes -> {} bytes (ratio {:.4}, saved {:.2}%)",
        stats.original_bytes,
        stats.compressed_bytes,
        stats.ratio(),
        stats.space_saving() * 100.0
    );
    if restored != text {
        log::error!("Decompressed text differs from the input");
        return Err(Error::new(ErrorKind::InvalidData, "round trip mismatch"));
    }
    Ok(())
}
