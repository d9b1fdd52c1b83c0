/// Represents an operation recognized at the start of an instruction line.
///
/// Every operation has a fixed arity which decides how the evaluator treats
/// it: unary operations act on the accumulator alone, binary operations take
/// the accumulator as their left operand and one parsed argument (or, when
/// folded, a sequence of them) as the right operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Assignment, written as a bare number (e.g. `5`).
    Set,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Floating-point remainder (`%`)
    Remainder,
    /// Negation of the accumulator (`_`)
    Negate,
    /// Exponentiation (`^`)
    Power,
    /// Square root of the accumulator (`SQRT`)
    SquareRoot,
}

/// The number of operands an operation takes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    /// Operates on the accumulator only.
    Unary,
    /// Combines the accumulator with a parsed argument.
    Binary,
}

impl Arity {
    /// Returns the operand count (`1` or `2`).
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 9] = [Self::Set,
                                Self::Add,
                                Self::Subtract,
                                Self::Multiply,
                                Self::Divide,
                                Self::Remainder,
                                Self::Negate,
                                Self::Power,
                                Self::SquareRoot];

    /// Returns the arity of the operation.
    ///
    /// # Example
    /// ```
    /// use foldcalc::operation::{Arity, Operation};
    ///
    /// assert_eq!(Operation::Negate.arity(), Arity::Unary);
    /// assert_eq!(Operation::Power.arity().count(), 2);
    /// ```
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Negate | Self::SquareRoot => Arity::Unary,
            Self::Set
            | Self::Add
            | Self::Subtract
            | Self::Multiply
            | Self::Divide
            | Self::Remainder
            | Self::Power => Arity::Binary,
        }
    }

    /// Maps a single-character operation symbol to its operation.
    ///
    /// Digits and the `SQRT` keyword are not single symbols and are handled
    /// by the recognizer directly.
    #[must_use]
    pub const fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            b'+' => Some(Self::Add),
            b'-' => Some(Self::Subtract),
            b'*' => Some(Self::Multiply),
            b'/' => Some(Self::Divide),
            b'%' => Some(Self::Remainder),
            b'_' => Some(Self::Negate),
            b'^' => Some(Self::Power),
            _ => None,
        }
    }

    /// Returns the textual token that selects this operation.
    ///
    /// `Set` has no token of its own; it is selected by a leading digit.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Set => "",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Remainder => "%",
            Self::Negate => "_",
            Self::Power => "^",
            Self::SquareRoot => "SQRT",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Set => "set",
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Remainder => "remainder",
            Self::Negate => "negate",
            Self::Power => "power",
            Self::SquareRoot => "square root",
        };
        write!(f, "{name}")
    }
}
