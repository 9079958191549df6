//! Subcommand implementations

use anyhow::{Context, Result};
use nether_stl::{
    BoundingBox, ReadOptions, StlFormat, Triangle, decode_stl_with, detect_format, parse_ascii,
    parse_binary, write_ascii, write_binary,
};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::Encoding;

fn read_file(input: &Path) -> Result<Vec<u8>> {
    std::fs::read(input).with_context(|| format!("Failed to read {:?}", input))
}

/// Print a summary of an STL file
pub fn info(input: &Path) -> Result<()> {
    let data = read_file(input)?;
    let format = detect_format(&data);
    println!("encoding:  {}", format);

    let triangles = match format {
        StlFormat::Binary => {
            parse_binary(&data).with_context(|| format!("Failed to decode {:?}", input))?
        }
        StlFormat::Ascii => {
            let solid =
                parse_ascii(&data).with_context(|| format!("Failed to decode {:?}", input))?;
            println!("solid:     '{}'", solid.name);
            match &solid.end_name {
                Some(end) => println!("endsolid:  '{}'", end),
                None => println!("endsolid:  (missing)"),
            }
            solid.triangles
        }
    };

    let bounds = BoundingBox::from_triangles(&triangles);
    println!("triangles: {}", triangles.len());
    println!(
        "min:       {:.6} {:.6} {:.6}",
        bounds.min.x, bounds.min.y, bounds.min.z
    );
    println!(
        "max:       {:.6} {:.6} {:.6}",
        bounds.max.x, bounds.max.y, bounds.max.z
    );
    let size = bounds.size();
    println!("size:      {:.6} {:.6} {:.6}", size.x, size.y, size.z);
    let center = bounds.center();
    println!("center:    {:.6} {:.6} {:.6}", center.x, center.y, center.z);
    Ok(())
}

/// Decode `input` and write it in the requested encoding
pub fn convert(input: &Path, output: Option<&Path>, to: Option<Encoding>) -> Result<()> {
    let data = read_file(input)?;
    let source = detect_format(&data);
    let target = to.unwrap_or(match source {
        StlFormat::Ascii => Encoding::Binary,
        StlFormat::Binary => Encoding::Ascii,
    });
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(input, target));

    let triangles = decode_stl_with(&data, &ReadOptions::default())
        .with_context(|| format!("Failed to decode {:?}", input))?;
    tracing::info!(
        "Converting {:?} ({}) -> {:?} ({:?}), {} triangles",
        input,
        source,
        output,
        target,
        triangles.len()
    );

    write_mesh(&output, &triangles, target)
}

fn write_mesh(output: &Path, triangles: &[Triangle], encoding: Encoding) -> Result<()> {
    let file =
        File::create(output).with_context(|| format!("Failed to create output: {:?}", output))?;
    match encoding {
        Encoding::Ascii => write_ascii(file, triangles),
        Encoding::Binary => write_binary(std::io::BufWriter::new(file), triangles),
    }
    .with_context(|| format!("Failed to write {:?}", output))
}

/// `part.stl` -> `part.binary.stl` / `part.ascii.stl`
fn default_output(input: &Path, encoding: Encoding) -> PathBuf {
    let suffix = match encoding {
        Encoding::Ascii => "ascii.stl",
        Encoding::Binary => "binary.stl",
    };
    input.with_extension(suffix)
}

/// Decode `input` and report the result
pub fn check(input: &Path, strict: bool) -> Result<()> {
    let data = read_file(input)?;
    let options = ReadOptions {
        strict_solid_names: strict,
    };
    let triangles = decode_stl_with(&data, &options)
        .with_context(|| format!("Invalid STL: {:?}", input))?;
    tracing::info!(
        "{:?} is valid {} STL with {} triangles",
        input,
        detect_format(&data),
        triangles.len()
    );
    Ok(())
}
