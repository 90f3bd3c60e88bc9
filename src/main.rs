extern crate balanced_collections;
extern crate rand;

use balanced_collections::red_black_tree::{Color, RedBlackMap};
use rand::{thread_rng, Rng};
use std::fmt;

#[derive(Debug)]
struct Instrument {
    id: i32,
    name: String,
    price: i32,
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Id: {}, Name: {}, Price: {}",
            self.id, self.name, self.price
        )
    }
}

fn print_tree(map: &RedBlackMap<Instrument>) {
    for (key, color, depth) in map.traverse() {
        let tag = match color {
            Color::Black => "Black",
            Color::Red => "Red",
        };
        println!("{}{} - {}", ">".repeat(depth), key, tag);
    }
}

fn main() {
    let mut rng = thread_rng();
    let mut map = RedBlackMap::new();
    let mut keys = Vec::new();

    for _ in 0..20 {
        let mut key = rng.gen_range(0, 100);
        while keys.contains(&key) {
            key = rng.gen_range(0, 100);
        }

        println!("added {}", key);
        map.insert(
            key,
            Instrument {
                id: key,
                name: format!("id-{}", key),
                price: key,
            },
        )
        .unwrap();
        keys.push(key);
    }

    for _ in 0..10 {
        let index = rng.gen_range(0, keys.len());
        let key = keys.remove(index);
        println!("deleted {}", key);
        map.remove(key).unwrap();
    }

    print_tree(&map);

    for key in &keys {
        println!("{}", key);
    }

    println!("{}", map.get(keys[0]).unwrap());
}
