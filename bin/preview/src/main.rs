use colorwheel::{ColorWheel, HostInput, Options, Raster};
use image::{Rgba, RgbaImage};

const DIAMETER: u32 = 400;

/// Stand-in for a host input field: it only stores the value.
struct Field {
    value: String,
}

impl HostInput for Field {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn emit_input(&mut self) {}

    fn emit_change(&mut self) {}
}

fn main() {
    let field = Field {
        value: "#FF8080".to_string(),
    };

    let mut wheel = ColorWheel::new(
        Raster::new(DIAMETER, DIAMETER),
        Raster::new(DIAMETER, DIAMETER),
        field,
        Options::default(),
    )
    .expect("could not construct the color wheel");

    wheel.draw();

    let spectrum = wheel.spectrum().surface().data();
    let marker = wheel.marker().surface().data();

    let mut img = RgbaImage::new(DIAMETER, DIAMETER);
    img.fill(255);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let i = ((y * DIAMETER + x) * 4) as usize;

        // Marker layer over spectrum layer over a white page.
        let layer = if marker[i + 3] != 0 {
            &marker[i..i + 4]
        } else if spectrum[i + 3] != 0 {
            &spectrum[i..i + 4]
        } else {
            continue;
        };
        *pixel = Rgba([layer[0], layer[1], layer[2], 255]);
    }

    img.save("wheel.png")
        .expect("could not write image to wheel.png");
}
