//! Scene generators shared by the benchmarks.

/// A scene with one camera followed by `count` alternating spheres and planes.
pub fn generate_scene(count: usize) -> Vec<u8> {
    let mut scene = String::from("[\n  { \"type\": \"camera\", \"width\": 2.0, \"height\": 2.0 }");
    for i in 0..count {
        let f = i as f64;
        if i % 2 == 0 {
            scene.push_str(&format!(
                ",\n  {{ \"type\": \"sphere\", \"color\": [1, {:.3}, 0], \"position\": [{}, 0, -{}], \"radius\": {:.2} }}",
                f / count as f64,
                f,
                f * 0.5,
                1.0 + f * 0.01
            ));
        } else {
            scene.push_str(&format!(
                ",\n  {{ \"type\": \"plane\", \"color\": [0, 0, 1], \"position\": [0, -{}, 0], \"normal\": [0, 1, 0] }}",
                f
            ));
        }
    }
    scene.push_str("\n]\n");
    scene.into_bytes()
}
