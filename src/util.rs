use std::collections::BTreeMap;

pub type Tile = usize;
pub type Face = u32;
pub type Count = u64;
pub type SnadderMap = BTreeMap<Tile, Tile>;
pub type DieMap<K> = BTreeMap<K, Count>;
pub type Entry<'a, K> = std::collections::btree_map::Entry<'a, K, Count>;
pub type Ratio = num::rational::Ratio<Count>;

#[inline]
pub fn die_map<K>() -> DieMap<K> {
    DieMap::new()
}
