use std::{
    env,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

mod attacks;
mod maps;

fn main() {
    generate_attack_maps();

    println!("cargo:rerun-if-changed=build");
}

fn generate_attack_maps() {
    let dir = env::var("OUT_DIR").unwrap();
    let path = Path::new(&dir).join("lookup.rs");
    let out = File::create(path).unwrap();
    write(BufWriter::new(out)).unwrap();
}

fn write(mut buf: BufWriter<File>) -> Result<(), std::io::Error> {
    macro_rules! write_map {
        ($name:tt, $type:tt, $items:expr) => {
            writeln!(buf, "static {}: [{}; {}] = {:?};", $name, $type, $items.len(), $items)?;
        };
    }

    write_map!("KING_MAP", "u64", maps::generate_king_map());
    write_map!("KNIGHT_MAP", "u64", maps::generate_knight_map());

    write_map!("WHITE_PAWN_MAP", "u64", maps::generate_white_pawn_map());
    write_map!("BLACK_PAWN_MAP", "u64", maps::generate_black_pawn_map());

    write_map!("RAYS", "[u64; 64]", maps::generate_rays());
    write_map!("BETWEEN", "[u64; 64]", maps::generate_between());
    write_map!("LINE", "[u64; 64]", maps::generate_lines());

    buf.flush()
}
