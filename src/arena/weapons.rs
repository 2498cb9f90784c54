//! Weapon catalog and per-weapon ammo state

/// Immutable ballistic profile for one catalog entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponProfile {
    pub name: &'static str,
    /// Health points removed per confirmed hit
    pub damage: i32,
    /// Recoil magnitude fed into the post-fire aim perturbation
    pub recoil: f32,
    /// Informational cadence, rounds per minute
    pub fire_rate: u32,
    /// Magazine capacity
    pub capacity: u32,
}

/// Fixed weapon catalog, ordered by selection index
pub const WEAPON_CATALOG: [WeaponProfile; 4] = [
    WeaponProfile {
        name: "AK-47",
        damage: 36,
        recoil: 8.0,
        fire_rate: 600,
        capacity: 30,
    },
    WeaponProfile {
        name: "M4A4",
        damage: 33,
        recoil: 5.0,
        fire_rate: 666,
        capacity: 30,
    },
    WeaponProfile {
        name: "AWP",
        damage: 115,
        recoil: 12.0,
        fire_rate: 41,
        capacity: 10,
    },
    WeaponProfile {
        name: "Glock-18",
        damage: 28,
        recoil: 3.0,
        fire_rate: 400,
        capacity: 20,
    },
];

/// Look up a profile by catalog position
pub fn profile_at(index: usize) -> Option<WeaponProfile> {
    WEAPON_CATALOG.get(index).copied()
}

/// Look up a profile by display name
pub fn profile_by_name(name: &str) -> Option<WeaponProfile> {
    WEAPON_CATALOG.iter().find(|p| p.name == name).copied()
}

/// Outcome of a single trigger pull
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireOutcome {
    /// One round left the magazine
    Discharged { damage: i32, recoil: f32 },
    /// Magazine was empty, nothing happened
    Empty,
}

/// Mutable ammo state for one catalog entry
#[derive(Debug, Clone, Copy)]
pub struct WeaponState {
    pub profile: WeaponProfile,
    pub ammo: u32,
}

impl WeaponState {
    pub fn new(profile: WeaponProfile) -> Self {
        Self {
            profile,
            ammo: profile.capacity,
        }
    }

    /// Attempt a discharge; an empty magazine is a no-op
    pub fn fire(&mut self) -> FireOutcome {
        if self.ammo == 0 {
            return FireOutcome::Empty;
        }
        self.ammo -= 1;
        FireOutcome::Discharged {
            damage: self.profile.damage,
            recoil: self.profile.recoil,
        }
    }

    /// Refill the magazine to capacity, whatever its current level
    pub fn reload(&mut self) {
        self.ammo = self.profile.capacity;
    }
}

/// One weapon state per catalog entry plus the active selection
#[derive(Debug, Clone)]
pub struct Arsenal {
    weapons: Vec<WeaponState>,
    active: usize,
}

impl Arsenal {
    /// Build a full arsenal from the catalog, first entry selected
    pub fn new() -> Self {
        Self {
            weapons: WEAPON_CATALOG.iter().copied().map(WeaponState::new).collect(),
            active: 0,
        }
    }

    /// Switch the active weapon, returns false for an out-of-range index
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.weapons.len() {
            return false;
        }
        self.active = index;
        true
    }

    pub fn active(&self) -> &WeaponState {
        &self.weapons[self.active]
    }

    pub fn active_mut(&mut self) -> &mut WeaponState {
        &mut self.weapons[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn get(&self, index: usize) -> Option<&WeaponState> {
        self.weapons.get(index)
    }
}

impl Default for Arsenal {
    fn default() -> Self {
        Self::new()
    }
}
