use std::{env, error::Error};

use midpoint::{Coord, Line, Point};

fn parse_point(s: &str) -> Result<Point, Box<dyn Error>> {
	let (x, y) = s.split_once(',')
		.ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
	Ok((x.trim().parse::<Coord>()?, y.trim().parse::<Coord>()?))
}

fn main() -> Result<(), Box<dyn Error>> {
	let args: Vec<String> = env::args().skip(1).collect();

	if args.len() < 2 {
		println!("usage: line_dump <x1,y1> <x2,y2> [--closed]");
		return Ok(());
	}

	let a = parse_point(&args[0])?;
	let b = parse_point(&args[1])?;
	let closed = args.get(2).is_some_and(|s| s == "--closed");

	let line = if closed { Line::closed(a, b) } else { Line::new(a, b) };
	println!("octant {} ({} points)", line.octant().index(), line.len());

	for (i, (x, y)) in line.enumerate() {
		println!("{i:4}: {x:6} {y:6}");
	}

	Ok(())
}
