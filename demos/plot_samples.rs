// Visualizes the importance-sampling strategies: draws a large number of
// directions from every sampler (and from the Blinn-Phong material's mixed
// lobes), splats them onto the xy-plane and writes the panels side by side
// as a grayscale heatmap. Tight specular lobes show up as small bright spots,
// the cosine lobe as a soft disk.
use bsdf_sampling::{
    blinn_phong::BlinnPhong,
    coordinate_system,
    generator::{self, MersenneTwisterGenerator},
    Material, SphereSampler, Vec3d,
};
use rayon::prelude::*;

const PANEL_SIZE: usize = 256;
const SAMPLES_PER_PANEL: usize = 500_000;

#[derive(Copy, Clone)]
enum Panel {
    Sampler(&'static str, SphereSampler),
    MaterialLobes(&'static str, f32),
}

impl Panel {
    fn label(self) -> &'static str {
        match self {
            Self::Sampler(label, _) | Self::MaterialLobes(label, _) => label,
        }
    }

    // splats the sampled directions into a PANEL_SIZE^2 histogram
    fn render(self, seed: u64) -> Vec<u32> {
        let mut counts = vec![0u32; PANEL_SIZE * PANEL_SIZE];
        let mut splat = |dir: Vec3d| {
            let x = ((dir.x * 0.5 + 0.5) * PANEL_SIZE as f64) as usize;
            let y = ((dir.y * 0.5 + 0.5) * PANEL_SIZE as f64) as usize;
            if x < PANEL_SIZE && y < PANEL_SIZE {
                counts[y * PANEL_SIZE + x] += 1;
            }
        };

        match self {
            Self::Sampler(_, sampler) => {
                let mut generator = MersenneTwisterGenerator::with_seed(seed);
                for _ in 0..SAMPLES_PER_PANEL {
                    splat(sampler.get_dir(&mut generator).dir);
                }
            }
            Self::MaterialLobes(_, shininess) => {
                let mut material = BlinnPhong::with_generator(
                    "plot",
                    generator::shared(MersenneTwisterGenerator::with_seed(seed)),
                );
                material.set_shininess(shininess);

                let w_i = Vec3d::new(-1.0, 0.0, 1.0).normalize();
                let normal = Vec3d::Z;
                let (tangent, bitangent) = coordinate_system(normal);
                for _ in 0..SAMPLES_PER_PANEL {
                    if let Some(sample) = material.sample(w_i, normal, tangent, bitangent) {
                        splat(sample.dir);
                    }
                }
            }
        }
        counts
    }
}

fn tone_map(counts: &[u32]) -> Vec<u8> {
    let max = counts.iter().copied().max().unwrap_or(1).max(1) as f64;
    counts
        .iter()
        .map(|&count| {
            let value = (count as f64 / max).powf(1.0 / 2.2);
            (value * 255.0) as u8
        })
        .collect()
}

fn write_png(path: &std::path::Path, width: u32, height: u32, pixels: &[u8]) {
    let file = std::fs::File::create(path).expect("could not create output file");
    let writer = std::io::BufWriter::new(file);
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().expect("could not write png header");
    writer
        .write_image_data(pixels)
        .expect("could not write png data");
}

fn main() {
    env_logger::init();

    let showcase = BlinnPhong::new("showcase");
    showcase.display_info();

    let panels = vec![
        Panel::Sampler("uniform", SphereSampler::Uniform),
        Panel::Sampler("cosine", SphereSampler::CosineWeighted),
        Panel::Sampler("blinn-phong 4", SphereSampler::BlinnPhong { shininess: 4.0 }),
        Panel::Sampler(
            "blinn-phong 32",
            SphereSampler::BlinnPhong { shininess: 32.0 },
        ),
        Panel::Sampler(
            "blinn-phong 128",
            SphereSampler::BlinnPhong { shininess: 128.0 },
        ),
        Panel::MaterialLobes("material lobes 16", 16.0),
    ];

    // each panel gets its own generator instance, so they can run in parallel
    let histograms: Vec<_> = panels
        .par_iter()
        .enumerate()
        .map(|(index, panel)| {
            let counts = panel.render(0xb5df + index as u64);
            log::info!("rendered panel '{}'", panel.label());
            tone_map(&counts)
        })
        .collect();

    // stitch the panels into one row
    let width = (PANEL_SIZE * panels.len()) as u32;
    let height = PANEL_SIZE as u32;
    let mut pixels = vec![0u8; PANEL_SIZE * PANEL_SIZE * panels.len()];
    for (panel_index, histogram) in histograms.iter().enumerate() {
        for row in 0..PANEL_SIZE {
            let src = row * PANEL_SIZE;
            let dst = row * PANEL_SIZE * panels.len() + panel_index * PANEL_SIZE;
            pixels[dst..dst + PANEL_SIZE].copy_from_slice(&histogram[src..src + PANEL_SIZE]);
        }
    }

    write_png(std::path::Path::new("samples.png"), width, height, &pixels);
    log::info!("wrote samples.png");
}
