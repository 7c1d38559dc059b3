//! Transition rules and the way-partitioned rule ROM.

/// Neighborhood connectivity of the automaton.
///
/// Fixed by the first parsed rule and enforced on every later one: 5 inputs
/// is the von Neumann neighborhood, 9 the Moore neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Five-connected (cell + orthogonal neighbors)
    Five,
    /// Nine-connected (cell + full 3x3 neighborhood)
    Nine,
}

impl Arity {
    /// Number of input cell states per rule
    pub fn inputs(self) -> usize {
        match self {
            Arity::Five => 5,
            Arity::Nine => 9,
        }
    }
}

/// One transition rule: `arity` input states mapping to one output state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Input cell states, in declared order
    pub inputs: Vec<u64>,
    /// Output cell state
    pub output: u64,
}

impl Rule {
    /// The default rule synthesized for an empty rule file
    pub fn default_five() -> Self {
        Rule {
            inputs: vec![0; Arity::Five.inputs()],
            output: 0,
        }
    }
}

/// The compiled, padded transition-rule ROM.
///
/// Invariants (established by the transition-table compiler):
/// - `rules.len()` is a multiple of `ways`,
/// - `rules.len() / ways == 2^address_width` (power-of-two ROM depth),
/// - `valid_addresses <= 2^address_width` counts the addresses holding
///   caller-written rules; the rest is alignment padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<Rule>,
    arity: Arity,
    ways: usize,
    address_width: u32,
    valid_addresses: usize,
    max_value: u64,
}

impl RuleTable {
    /// Assemble a table from already-padded rules.
    pub fn new(
        rules: Vec<Rule>,
        arity: Arity,
        ways: usize,
        address_width: u32,
        valid_addresses: usize,
        max_value: u64,
    ) -> Self {
        debug_assert_eq!(rules.len() % ways, 0);
        debug_assert_eq!(rules.len() / ways, 1 << address_width);
        RuleTable {
            rules,
            arity,
            ways,
            address_width,
            valid_addresses,
            max_value,
        }
    }

    /// Detected connectivity
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Parallel lookup width
    pub fn ways(&self) -> usize {
        self.ways
    }

    /// Bits needed to index the valid (pre-padding) addresses
    pub fn address_width(&self) -> u32 {
        self.address_width
    }

    /// Number of addresses actually probed per calculation step
    pub fn valid_addresses(&self) -> usize {
        self.valid_addresses
    }

    /// Physical ROM depth, `2^address_width`
    pub fn addresses(&self) -> usize {
        1 << self.address_width
    }

    /// Total rule count including padding
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table holds no rules (never true after compilation)
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Largest input or output state observed, floored at 1
    pub fn max_value(&self) -> u64 {
        self.max_value
    }

    /// Rule stored at `(address, way)`
    pub fn rule(&self, address: usize, way: usize) -> &Rule {
        &self.rules[address * self.ways + way]
    }
}
