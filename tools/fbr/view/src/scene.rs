use clap::ValueEnum;
use tracing::debug;

use fbr_core::{BlitFlags, DrawColors, HostMemory, Rasterizer};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Scene {
    Shapes,
    Text,
    Sprites,
    All,
}

const SMILEY: [u8; 8] = [
    0b11000011,
    0b10000001,
    0b00100100,
    0b00100100,
    0b00000000,
    0b00100100,
    0b10011001,
    0b11000011,
];

// two 4x4 tiles side by side, 2bpp: a ramp and a checker
const TILES_STRIDE: i32 = 8;
const TILES: [u8; 8] = [
    0b00_01_10_11, 0b01_10_01_10,
    0b01_10_11_00, 0b10_01_10_01,
    0b10_11_00_01, 0b01_10_01_10,
    0b11_00_01_10, 0b10_01_10_01,
];

pub fn draw(scene: Scene, memory: &mut HostMemory<'_>) {
    let mut raster = memory.rasterizer();
    match scene {
        Scene::Shapes => shapes(&mut raster),
        Scene::Text => text(&mut raster),
        Scene::Sprites => sprites(&mut raster),
        Scene::All => {
            shapes(&mut raster);
            text(&mut raster);
            sprites(&mut raster);
        }
    }
}

fn shapes(raster: &mut Rasterizer<'_>) {
    debug!("scene: shapes");
    let initial = raster.draw_colors();

    raster.rect(4, 4, 72, 40);

    raster.set_draw_colors(DrawColors(0x0043));
    raster.oval(84, 4, 72, 40);

    raster.set_draw_colors(DrawColors(0x0030));
    raster.oval(100, 14, 40, 20);

    raster.set_draw_colors(DrawColors(0x0004));
    raster.line(4, 52, 155, 60);
    raster.line(155, 52, 4, 60);
    raster.hline(-10, 64, 200);
    raster.vline(80, 48, 20);

    // half off the right edge, outline only
    raster.set_draw_colors(DrawColors(0x0020));
    raster.rect(140, 48, 40, 16);

    raster.set_draw_colors(initial);
}

fn text(raster: &mut Rasterizer<'_>) {
    debug!("scene: text");
    let initial = raster.draw_colors();

    raster.set_draw_colors(DrawColors(0x0040));
    raster.text_str("Hello, 2bpp!\nFour colors,\nno more.", 8, 72);

    raster.set_draw_colors(DrawColors(0x0013));
    raster.text_str(" boxed ", 92, 96);

    raster.set_draw_colors(initial);
}

fn sprites(raster: &mut Rasterizer<'_>) {
    debug!("scene: sprites");
    let initial = raster.draw_colors();

    raster.set_draw_colors(DrawColors(0x0030));
    let flips = [
        BlitFlags::empty(),
        BlitFlags::FLIP_X,
        BlitFlags::FLIP_Y,
        BlitFlags::ROTATE,
        BlitFlags::ROTATE | BlitFlags::FLIP_Y,
    ];
    for (i, flags) in flips.into_iter().enumerate() {
        raster.blit(&SMILEY, 8 + 16 * i as i32, 112, 8, 8, flags);
    }

    raster.set_draw_colors(DrawColors(0x4321));
    for (i, src_x) in [0, 4].into_iter().enumerate() {
        raster.blit_sub(&TILES, 96 + 8 * i as i32, 112, 4, 4, src_x, 0, TILES_STRIDE, BlitFlags::BPP2);
    }

    // logical 0 transparent, only the ramp's opaque pixels land
    raster.set_draw_colors(DrawColors(0x3210));
    raster.blit_sub(&TILES, 120, 112, 4, 4, 0, 0, TILES_STRIDE, BlitFlags::BPP2 | BlitFlags::FLIP_X);

    // off the bottom-left corner
    raster.set_draw_colors(DrawColors(0x0020));
    raster.blit(&SMILEY, -4, 156, 8, 8, BlitFlags::empty());

    raster.set_draw_colors(initial);
}

#[cfg(test)]
mod tests {
    use super::*;
    use fbr_core::memory::MEMORY_SIZE;

    fn render(scene: Scene) -> Vec<u8> {
        let mut ram = vec![0u8; MEMORY_SIZE];
        let mut memory = HostMemory::new(&mut ram).unwrap();
        memory.reset();
        draw(scene, &mut memory);
        memory.framebuffer_bytes().to_vec()
    }

    #[test_log::test]
    fn every_scene_draws_something() {
        for scene in [Scene::Shapes, Scene::Text, Scene::Sprites] {
            assert!(render(scene).iter().any(|&b| b != 0), "{scene:?} is blank");
        }
    }

    #[test_log::test]
    fn sprites_do_not_overlap_shapes() {
        let shapes = render(Scene::Shapes);
        let sprites = render(Scene::Sprites);
        let all = render(Scene::All);

        // rows 112.. belong to the sprite scene alone
        let from = 112 * 160 / 4;
        assert!(shapes[from..].iter().all(|&b| b == 0));
        assert_eq!(all[from..], sprites[from..]);
    }
}
