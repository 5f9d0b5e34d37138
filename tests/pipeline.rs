use std::path::PathBuf;

use coppertrace::{
    BOARD_HEIGHT, BOARD_WIDTH, BoardOptions, WireStyle, render_board, render_to_file,
};

fn opts(style: WireStyle, seed: u64, network: bool) -> BoardOptions {
    BoardOptions {
        style,
        seed: Some(seed),
        network,
    }
}

#[test]
fn seeded_runs_are_byte_identical() {
    let options = opts(WireStyle::Grid, 42, false);
    let a = render_board(&options).unwrap();
    let b = render_board(&options).unwrap();
    assert_eq!(a.data, b.data);
}

#[test]
fn different_seeds_produce_different_boards() {
    let a = render_board(&opts(WireStyle::Random, 42, true)).unwrap();
    let b = render_board(&opts(WireStyle::Random, 43, true)).unwrap();
    assert_ne!(a.data, b.data);
}

#[test]
fn every_style_renders_at_board_dimensions() {
    for (seed, style) in [
        (1, WireStyle::Grid),
        (2, WireStyle::Random),
        (3, WireStyle::Radial),
        (4, WireStyle::Flow),
    ] {
        let raster = render_board(&opts(style, seed, true)).unwrap();
        assert_eq!(raster.width, BOARD_WIDTH);
        assert_eq!(raster.height, BOARD_HEIGHT);
        assert_eq!(
            raster.data.len(),
            (BOARD_WIDTH * BOARD_HEIGHT * 4) as usize
        );
        assert_eq!(
            raster.to_rgb8().len(),
            (BOARD_WIDTH * BOARD_HEIGHT * 3) as usize
        );
    }
}

#[test]
fn finished_boards_are_fully_opaque() {
    let raster = render_board(&opts(WireStyle::Flow, 5, true)).unwrap();
    assert!(raster.data.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn render_to_file_writes_a_png() {
    let dir = PathBuf::from("target").join("pipeline_tests");
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("cover.png");
    let _ = std::fs::remove_file(&out_path);

    render_to_file(&out_path, &opts(WireStyle::Radial, 9, false)).unwrap();

    let bytes = std::fs::read(&out_path).unwrap();
    assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
}
