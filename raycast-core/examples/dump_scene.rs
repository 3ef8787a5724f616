//! Example: parse a scene from stdin and print its objects.
//!
//! Run with: cargo run --example dump_scene < scene.json

use raycast_core::{parse_reader, ParseOptions, SceneObject};

fn main() {
    let doc = match parse_reader(std::io::stdin().lock(), &ParseOptions::default()) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    for warning in doc.warnings() {
        eprintln!("warning: {}", warning);
    }

    for (i, object) in doc.iter().enumerate() {
        match object {
            SceneObject::Camera(c) => println!("{:3}: camera {} x {}", i, c.width, c.height),
            SceneObject::Sphere(s) => println!(
                "{:3}: sphere at {} radius {} color {}",
                i, s.position, s.radius, s.color
            ),
            SceneObject::Plane(p) => println!(
                "{:3}: plane at {} normal {} color {}",
                i, p.position, p.unit_normal(), p.color
            ),
        }
    }
}
