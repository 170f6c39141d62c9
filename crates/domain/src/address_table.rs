use crate::mac_address::MacAddress;
use crate::target::Gateway;
use std::collections::hash_map;
use std::collections::HashMap;
use std::net::IpAddr;

/// Snapshot of IP → hardware address bindings at one instant.
///
/// Built once per probe and never mutated afterwards; a refresh produces a
/// new table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressTable {
    entries: HashMap<IpAddr, MacAddress>,
}

impl AddressTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, ip: &IpAddr) -> Option<&MacAddress> {
        self.entries.get(ip)
    }

    pub fn contains_key(&self, ip: &IpAddr) -> bool {
        self.entries.contains_key(ip)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, IpAddr, MacAddress> {
        self.entries.iter()
    }

    /// Entries of `self` that are missing from `other` or bound to a
    /// different hardware address there.
    pub fn diff(&self, other: &AddressTable) -> AddressTable {
        self.entries
            .iter()
            .filter(|(ip, mac)| other.get(*ip) != Some(*mac))
            .map(|(ip, mac)| (*ip, *mac))
            .collect()
    }

    /// Number of entries, other than the gateway itself, that carry the
    /// gateway's hardware address.
    pub fn count_gateway_shared(&self, gateway: &Gateway) -> usize {
        self.entries
            .iter()
            .filter(|(ip, mac)| gateway.is_shared_by(ip, mac))
            .count()
    }
}

impl FromIterator<(IpAddr, MacAddress)> for AddressTable {
    fn from_iter<I: IntoIterator<Item = (IpAddr, MacAddress)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AddressTable {
    type Item = (IpAddr, MacAddress);
    type IntoIter = hash_map::IntoIter<IpAddr, MacAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a AddressTable {
    type Item = (&'a IpAddr, &'a MacAddress);
    type IntoIter = hash_map::Iter<'a, IpAddr, MacAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Additions and removals between two consecutive snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableDelta {
    pub added: AddressTable,
    pub removed: AddressTable,
}

impl TableDelta {
    /// Without a previous snapshot every current entry counts as added.
    pub fn between(previous: Option<&AddressTable>, current: &AddressTable) -> Self {
        match previous {
            Some(previous) => Self {
                added: current.diff(previous),
                removed: previous.diff(current),
            },
            None => Self {
                added: current.clone(),
                removed: AddressTable::new(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
