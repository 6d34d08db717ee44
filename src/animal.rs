use std::fmt;
use std::sync::Arc;

pub const CAT_SOUND: &str = "Мяу!";
pub const DOG_SOUND: &str = "Гав!";

/// The closed set of animal variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Cat,
    Dog,
}

impl Kind {
    pub fn sound(self) -> &'static str {
        match self {
            Kind::Cat => CAT_SOUND,
            Kind::Dog => DOG_SOUND,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Cat => f.write_str("cat"),
            Kind::Dog => f.write_str("dog"),
        }
    }
}

/// Anything that can report a display index and make a sound.
///
/// Implementors are immutable values: the index and kind are fixed at
/// construction and never change afterwards.
pub trait Animal: Send + Sync + fmt::Debug {
    fn index(&self) -> i64;

    fn kind(&self) -> Kind;

    fn sound(&self) -> &'static str {
        self.kind().sound()
    }
}

/// An animal that can be shared across announcer threads.
pub type SharedAnimal = Arc<dyn Animal>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cat {
    pub index: i64,
}

impl Animal for Cat {
    fn index(&self) -> i64 {
        self.index
    }

    fn kind(&self) -> Kind {
        Kind::Cat
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dog {
    pub index: i64,
}

impl Animal for Dog {
    fn index(&self) -> i64 {
        self.index
    }

    fn kind(&self) -> Kind {
        Kind::Dog
    }
}

/// Any integer is a valid index, including zero, negatives and duplicates.
pub fn new_cat(index: i64) -> SharedAnimal {
    Arc::new(Cat { index })
}

pub fn new_dog(index: i64) -> SharedAnimal {
    Arc::new(Dog { index })
}

pub fn new_animal(kind: Kind, index: i64) -> SharedAnimal {
    match kind {
        Kind::Cat => new_cat(index),
        Kind::Dog => new_dog(index),
    }
}

/// Render one announcement line (without the trailing newline).
///
/// The index is right-aligned to width 3; wider numbers are printed in full.
pub fn format_line(animal: &dyn Animal) -> String {
    format!("{:>3}: {}", animal.index(), animal.sound())
}
