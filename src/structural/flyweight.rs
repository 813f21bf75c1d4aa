//! Flyweight: monsters keep only their position; the heavy, shared part
//! (name, texture, base health) lives once per kind in `MonsterFactory`.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::console::Console;

/// Intrinsic, shared state.
#[derive(Debug, PartialEq, Eq)]
pub struct MonsterType {
    pub name: String,
    pub texture: String,
    pub base_health: i32,
}

#[derive(Debug, Default)]
pub struct MonsterFactory {
    types: FxHashMap<(String, String), Rc<MonsterType>>,
}

impl MonsterFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached type for `(name, texture)`, creating it on first use.
    /// `base_health` only matters for the first request of a given key.
    pub fn get_type(&mut self, name: &str, texture: &str, base_health: i32) -> Rc<MonsterType> {
        let key = (name.to_string(), texture.to_string());
        if let Some(existing) = self.types.get(&key) {
            tracing::debug!(name, texture, "flyweight cache hit");
            return Rc::clone(existing);
        }

        tracing::debug!(name, texture, "flyweight cache miss");
        let created = Rc::new(MonsterType {
            name: key.0.clone(),
            texture: key.1.clone(),
            base_health,
        });
        self.types.insert(key, Rc::clone(&created));
        created
    }

    /// Number of distinct types created so far.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}

/// Extrinsic state plus a handle to the shared type.
#[derive(Debug, Clone)]
pub struct Monster {
    x: i32,
    y: i32,
    kind: Rc<MonsterType>,
}

impl Monster {
    pub fn new(x: i32, y: i32, kind: Rc<MonsterType>) -> Self {
        Monster { x, y, kind }
    }

    pub fn kind(&self) -> &Rc<MonsterType> {
        &self.kind
    }

    pub fn draw(&self, out: &dyn Console) {
        out.line(&format!(
            "Draw {} {} at ({},{})",
            self.kind.name, self.kind.texture, self.x, self.y
        ));
    }
}

pub fn demo(out: &dyn Console) {
    let mut factory = MonsterFactory::new();

    let spawns = [
        ("Orc", "orc.png", 100, (0, 0)),
        ("Orc", "orc.png", 100, (10, 5)),
        ("Orc", "orc.png", 100, (3, 7)),
        ("Goblin", "goblin.png", 50, (20, 20)),
        ("Goblin", "goblin.png", 50, (25, 30)),
    ];

    let mut monsters = Vec::with_capacity(spawns.len());
    for (name, texture, health, (x, y)) in spawns {
        monsters.push(Monster::new(x, y, factory.get_type(name, texture, health)));
    }

    for monster in &monsters {
        monster.draw(out);
    }
    out.line(&format!(
        "{} monsters share {} monster types",
        monsters.len(),
        factory.type_count()
    ));
}
