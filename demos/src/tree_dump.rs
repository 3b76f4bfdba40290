// SPDX-License-Identifier: Apache-2.0

// Parses JSON from argv (or a built-in sample) and prints the tree shape.

use jsontree::Element;

fn dump(element: &Element, indent: usize) {
    let pad = "  ".repeat(indent);
    match element {
        Element::Object(members) => {
            println!("{pad}object ({} members)", members.len());
            for member in members {
                println!("{pad}  key {:?}", member.name_str().unwrap_or("<non-utf8>"));
                dump(&member.value, indent + 2);
            }
        }
        Element::Array(items) => {
            println!("{pad}array ({} items)", items.len());
            for item in items {
                dump(item, indent + 1);
            }
        }
        Element::String(_) => {
            println!("{pad}string {:?}", element.as_str().unwrap_or("<non-utf8>"));
        }
        Element::Number(value) => {
            println!("{pad}number {value}");
        }
    }
}

fn main() {
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| r#"{"name":"demo","values":[1,2.5,"three"],"nested":{}}"#.into());

    match jsontree::parse(input.as_bytes()) {
        Ok(tree) => {
            dump(&tree, 0);
            jsontree::free(tree);
        }
        Err(error) => {
            eprintln!("parse failed: {error}");
            std::process::exit(1);
        }
    }
}
