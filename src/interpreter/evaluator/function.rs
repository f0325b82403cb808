use std::{collections::HashMap, sync::LazyLock};

/// A built-in numeric operation.
///
/// The variant fixes the arity: a unary builtin is only found for calls with
/// one argument, a binary builtin only for calls with two.
#[derive(Clone, Copy)]
pub enum Builtin {
    /// An operation over one value.
    Unary(fn(f64) -> f64),
    /// An operation over two values, applied in argument order.
    Binary(fn(f64, f64) -> f64),
}

impl Builtin {
    /// Number of arguments the operation takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }

    /// Applies the operation to already evaluated arguments.
    ///
    /// Returns `None` if the number of arguments does not match the arity.
    #[must_use]
    pub fn apply(&self, args: &[f64]) -> Option<f64> {
        match (self, args) {
            (Self::Unary(f), [x]) => Some(f(*x)),
            (Self::Binary(f), [a, b]) => Some(f(*a, *b)),
            _ => None,
        }
    }
}

/// Defines the builtin function table.
///
/// Each entry gives a name and an operation; the arity is taken from the
/// `Builtin` variant and becomes part of the lookup key. The macro produces
/// `BUILTIN_TABLE`, built on first use, and `BUILTIN_FUNCTIONS`, the list of
/// names in declaration order.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $builtin:expr
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: LazyLock<HashMap<(&'static str, usize), Builtin>> =
            LazyLock::new(|| {
                let entries: &[(&'static str, Builtin)] = &[$(($name, $builtin),)*];
                entries.iter()
                       .map(|&(name, builtin)| ((name, builtin.arity()), builtin))
                       .collect()
            });
        /// Names of all builtin functions, in declaration order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"   => Builtin::Unary(f64::sin),
    "cos"   => Builtin::Unary(f64::cos),
    "tan"   => Builtin::Unary(f64::tan),
    "asin"  => Builtin::Unary(f64::asin),
    "acos"  => Builtin::Unary(f64::acos),
    "atan"  => Builtin::Unary(f64::atan),
    "sinh"  => Builtin::Unary(f64::sinh),
    "cosh"  => Builtin::Unary(f64::cosh),
    "tanh"  => Builtin::Unary(f64::tanh),
    "asinh" => Builtin::Unary(f64::asinh),
    "acosh" => Builtin::Unary(f64::acosh),
    "atanh" => Builtin::Unary(f64::atanh),
    "sqrt"  => Builtin::Unary(f64::sqrt),
    "cbrt"  => Builtin::Unary(f64::cbrt),
    "exp"   => Builtin::Unary(f64::exp),
    "ln"    => Builtin::Unary(f64::ln),
    "log10" => Builtin::Unary(f64::log10),
    "log2"  => Builtin::Unary(f64::log2),
    "abs"   => Builtin::Unary(f64::abs),
    "log"   => Builtin::Binary(log),
    "pow"   => Builtin::Binary(f64::powf),
    "mod"   => Builtin::Binary(fmod),
}

/// Looks up a builtin by name and argument count.
///
/// # Example
/// ```
/// use linecalc::interpreter::evaluator::function::lookup;
///
/// assert!(lookup("pow", 2).is_some());
/// assert!(lookup("pow", 1).is_none());
/// assert!(lookup("sin", 1).is_some());
/// assert!(lookup("foo", 1).is_none());
/// ```
#[must_use]
pub fn lookup(name: &str, arity: usize) -> Option<Builtin> {
    BUILTIN_TABLE.get(&(name, arity)).copied()
}

/// Logarithm of `x` in the given `base`. The base comes first: `log(2, 8)` is 3.
fn log(base: f64, x: f64) -> f64 {
    x.ln() / base.ln()
}

/// Floating-point remainder; the result takes the sign of the dividend.
fn fmod(a: f64, b: f64) -> f64 {
    a % b
}
