use super::{spell_structs::Spell, Raws};
use std::collections::{HashMap, HashSet};

#[derive(Default, Debug)]
pub struct RawMaster {
    pub raws: Raws,
    pub spell_index: HashMap<String, usize>,
}

impl RawMaster {
    pub fn load(&mut self, raws: Raws) {
        self.raws = raws;
        self.spell_index = HashMap::new();
        let mut used_names: HashSet<String> = HashSet::new();
        for (i, spell) in self.raws.spells.iter().enumerate() {
            if used_names.contains(&spell.name) {
                tracing::warn!("duplicate spell name in raws [{}]", spell.name);
            }
            self.spell_index.insert(spell.name.clone(), i);
            used_names.insert(spell.name.clone());
        }
        tracing::debug!("Loaded {} spells", self.raws.spells.len());
    }

    pub fn find_spell(&self, name: &str) -> Option<&Spell> {
        self.spell_index
            .get(name)
            .map(|index| &self.raws.spells[*index])
    }

    pub fn spells(&self) -> &[Spell] {
        &self.raws.spells
    }

    pub fn len(&self) -> usize {
        self.raws.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raws.spells.is_empty()
    }
}
