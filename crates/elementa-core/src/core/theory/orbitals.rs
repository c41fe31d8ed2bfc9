use super::error::TheoryError;
use super::exceptions;
use std::fmt;
use std::str::FromStr;

/// Lowest atomic number accepted by the filling engine.
pub const MIN_FILL_Z: u32 = 1;
/// Highest atomic number accepted by the filling engine.
pub const MAX_FILL_Z: u32 = 173;

const MAX_PRINCIPAL: u8 = 10;

/// Noble-gas cores available for compact notation, ordered by atomic number.
pub const NOBLE_GAS_CORES: [(u32, &str); 7] = [
    (2, "He"),
    (10, "Ne"),
    (18, "Ar"),
    (36, "Kr"),
    (54, "Xe"),
    (86, "Rn"),
    (118, "Og"),
];

/// An orbital type, identified by its angular-momentum quantum number.
///
/// The declaration order (s < p < d < f < g) is the conventional notation order
/// used when printing orbitals of the same principal quantum number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subshell {
    S,
    P,
    D,
    F,
    G,
}

impl Subshell {
    pub const ALL: [Self; 5] = [Self::S, Self::P, Self::D, Self::F, Self::G];

    #[inline]
    pub const fn angular_momentum(self) -> u8 {
        match self {
            Self::S => 0,
            Self::P => 1,
            Self::D => 2,
            Self::F => 3,
            Self::G => 4,
        }
    }

    /// Maximum electron count, `2(2l + 1)`.
    #[inline]
    pub const fn capacity(self) -> u8 {
        2 * (2 * self.angular_momentum() + 1)
    }

    pub const fn letter(self) -> char {
        match self {
            Self::S => 's',
            Self::P => 'p',
            Self::D => 'd',
            Self::F => 'f',
            Self::G => 'g',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            's' => Some(Self::S),
            'p' => Some(Self::P),
            'd' => Some(Self::D),
            'f' => Some(Self::F),
            'g' => Some(Self::G),
            _ => None,
        }
    }
}

impl fmt::Display for Subshell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Electron occupancy of a single orbital, e.g. `3d5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occupation {
    pub n: u8,
    pub subshell: Subshell,
    pub electrons: u8,
}

impl Occupation {
    pub const fn new(n: u8, subshell: Subshell, electrons: u8) -> Self {
        Self {
            n,
            subshell,
            electrons,
        }
    }

    #[inline]
    fn notation_key(&self) -> (u8, Subshell) {
        (self.n, self.subshell)
    }
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.n, self.subshell, self.electrons)
    }
}

impl FromStr for Occupation {
    type Err = String;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let split = token
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| token.to_string())?;
        let (n_part, rest) = token.split_at(split);
        let mut chars = rest.chars();
        let subshell = chars
            .next()
            .and_then(Subshell::from_letter)
            .ok_or_else(|| token.to_string())?;
        let n = n_part.parse::<u8>().map_err(|_| token.to_string())?;
        let electrons = chars
            .as_str()
            .parse::<u8>()
            .map_err(|_| token.to_string())?;
        Ok(Self::new(n, subshell, electrons))
    }
}

/// The canonical Madelung filling order for n = 1..=10 and l < n.
///
/// Orbitals are sorted by `n + l` ascending, ties broken by lower `n`.
pub fn aufbau_order() -> Vec<(u8, Subshell)> {
    let mut order: Vec<(u8, Subshell)> = (1..=MAX_PRINCIPAL)
        .flat_map(|n| {
            Subshell::ALL
                .into_iter()
                .filter(move |s| s.angular_momentum() < n)
                .map(move |s| (n, s))
        })
        .collect();
    order.sort_by_key(|&(n, s)| (n + s.angular_momentum(), n));
    order
}

/// An electron configuration as an ordered list of occupied orbitals.
///
/// Occupations are kept in filling order; [`fmt::Display`] prints them in
/// conventional notation order (by `n`, then s < p < d < f < g).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElectronConfiguration {
    occupations: Vec<Occupation>,
}

impl ElectronConfiguration {
    pub fn from_occupations(occupations: Vec<Occupation>) -> Self {
        Self { occupations }
    }

    /// Idealized Madelung configuration, without the exception table.
    pub fn madelung(z: u32) -> Self {
        let mut remaining = z;
        let mut occupations = Vec::new();
        for (n, subshell) in aufbau_order() {
            if remaining == 0 {
                break;
            }
            let electrons = remaining.min(subshell.capacity() as u32);
            occupations.push(Occupation::new(n, subshell, electrons as u8));
            remaining -= electrons;
        }
        Self { occupations }
    }

    /// Ground-state configuration: Madelung filling, replaced by the exact
    /// configuration when `z` is a known exception.
    pub fn ground_state(z: u32) -> Result<Self, TheoryError> {
        TheoryError::check_range(z, MIN_FILL_Z, MAX_FILL_Z)?;
        Ok(exceptions::lookup(z)
            .map(Self::from_occupations)
            .unwrap_or_else(|| Self::madelung(z)))
    }

    pub fn occupations(&self) -> &[Occupation] {
        &self.occupations
    }

    pub fn is_empty(&self) -> bool {
        self.occupations.iter().all(|o| o.electrons == 0)
    }

    pub fn total_electrons(&self) -> u32 {
        self.occupations.iter().map(|o| o.electrons as u32).sum()
    }

    pub fn max_principal(&self) -> Option<u8> {
        self.occupations
            .iter()
            .filter(|o| o.electrons > 0)
            .map(|o| o.n)
            .max()
    }

    pub fn in_notation_order(&self) -> Vec<Occupation> {
        let mut sorted: Vec<Occupation> = self
            .occupations
            .iter()
            .copied()
            .filter(|o| o.electrons > 0)
            .collect();
        sorted.sort_by_key(Occupation::notation_key);
        sorted
    }

    /// Collapses everything up to the largest noble gas strictly below `z` into
    /// a bracketed core.
    pub fn compact(&self, z: u32) -> CompactConfiguration {
        let Some(core) = NobleGasCore::below(z) else {
            return CompactConfiguration {
                core: None,
                valence: self.clone(),
            };
        };

        let mut cumulative = 0u32;
        let mut valence = Vec::new();
        for occupation in &self.occupations {
            cumulative += occupation.electrons as u32;
            if cumulative > core.atomic_number {
                valence.push(*occupation);
            }
        }

        CompactConfiguration {
            core: Some(core),
            valence: Self::from_occupations(valence),
        }
    }
}

impl fmt::Display for ElectronConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<String> = self
            .in_notation_order()
            .iter()
            .map(ToString::to_string)
            .collect();
        write!(f, "{}", tokens.join(" "))
    }
}

impl FromStr for ElectronConfiguration {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let occupations = s
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<Occupation>()
                    .map_err(|token| TheoryError::InvalidOrbitalToken {
                        token,
                        config: s.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_occupations(occupations))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NobleGasCore {
    pub atomic_number: u32,
    pub symbol: &'static str,
}

impl NobleGasCore {
    /// The largest noble-gas core whose atomic number is strictly below `z`.
    pub fn below(z: u32) -> Option<Self> {
        NOBLE_GAS_CORES
            .iter()
            .rev()
            .find(|(core_z, _)| *core_z < z)
            .map(|&(atomic_number, symbol)| Self {
                atomic_number,
                symbol,
            })
    }

    /// The row of the periodic table this noble gas closes.
    pub fn closed_period(&self) -> u8 {
        NOBLE_GAS_CORES
            .iter()
            .position(|(z, _)| *z == self.atomic_number)
            .map_or(0, |index| index as u8 + 1)
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        NOBLE_GAS_CORES
            .iter()
            .find(|(_, s)| *s == symbol)
            .map(|&(atomic_number, symbol)| Self {
                atomic_number,
                symbol,
            })
    }
}

/// A configuration in noble-gas-core notation, e.g. `[Xe] 4f14 5d10 6s1`.
///
/// Valence and block derivations operate on the part after the core only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactConfiguration {
    core: Option<NobleGasCore>,
    valence: ElectronConfiguration,
}

impl CompactConfiguration {
    pub fn core(&self) -> Option<NobleGasCore> {
        self.core
    }

    pub fn valence(&self) -> &ElectronConfiguration {
        &self.valence
    }
}

impl fmt::Display for CompactConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.core {
            Some(core) if self.valence.is_empty() => write!(f, "[{}]", core.symbol),
            Some(core) => write!(f, "[{}] {}", core.symbol, self.valence),
            None => write!(f, "{}", self.valence),
        }
    }
}

impl FromStr for CompactConfiguration {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (core, rest) = match trimmed.strip_prefix('[') {
            Some(after_bracket) => {
                let (symbol, rest) = after_bracket.split_once(']').ok_or_else(|| {
                    TheoryError::InvalidOrbitalToken {
                        token: trimmed.to_string(),
                        config: s.to_string(),
                    }
                })?;
                let core = NobleGasCore::from_symbol(symbol.trim())
                    .ok_or_else(|| TheoryError::UnknownCore(symbol.trim().to_string()))?;
                (Some(core), rest)
            }
            None => (None, trimmed),
        };
        Ok(Self {
            core,
            valence: rest.parse()?,
        })
    }
}

/// Electron configuration of element `z` as a string.
///
/// In compact mode the largest noble-gas core below `z` is bracketed; otherwise
/// every filled orbital is printed.
///
/// # Errors
///
/// Returns [`TheoryError::AtomicNumberOutOfRange`] outside `1..=173`.
pub fn fill(z: u32, compact: bool) -> Result<String, TheoryError> {
    let config = ElectronConfiguration::ground_state(z)?;
    Ok(if compact {
        config.compact(z).to_string()
    } else {
        config.to_string()
    })
}

/// Electrons in the outermost shell of the valence part of `config`.
///
/// When the highest shell holds only d or f electrons the count is 0, which
/// follows the group-classification convention rather than bonding capacity.
pub fn valence_electron_count(config: &CompactConfiguration) -> u32 {
    let valence = config.valence();
    let Some(max_n) = valence.max_principal() else {
        return 0;
    };

    let outer: Vec<&Occupation> = valence
        .occupations()
        .iter()
        .filter(|o| o.n == max_n && o.electrons > 0)
        .collect();

    if !outer
        .iter()
        .any(|o| matches!(o.subshell, Subshell::S | Subshell::P))
    {
        return 0;
    }

    outer.iter().map(|o| o.electrons as u32).sum()
}

/// The orbital letter of the last orbital printed for `config`'s valence part.
pub fn block_of(config: &CompactConfiguration) -> Subshell {
    config
        .valence()
        .in_notation_order()
        .last()
        .map_or(Subshell::S, |o| o.subshell)
}

/// Periodic-table row: one past the row that closes with the bracketed core.
pub fn period_of(config: &CompactConfiguration) -> u8 {
    config.core().map_or(1, |core| core.closed_period() + 1)
}
