use alg_expr::{FunctionName, VariableName};
use crate::{
    consts,
    value::{Complex, Real, Value},
};
use levenshtein::levenshtein;
use std::{
    collections::HashMap,
    fmt::{self, Debug, Display, Formatter},
    sync::Arc,
};

#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// The trigonometric mode of a context. This affects how the input to trigonometric functions is
/// interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[repr(u8)]
pub enum TrigMode {
    /// Use radians.
    #[default]
    Radians,

    /// Use degrees.
    Degrees,
}

impl Display for TrigMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TrigMode::Radians => write!(f, "radians"),
            TrigMode::Degrees => write!(f, "degrees"),
        }
    }
}

/// The precision that constants in an expression are evaluated with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[repr(u8)]
pub enum Precision {
    /// Evaluate constants as [`Value::Single`].
    Single,

    /// Evaluate constants as [`Value::Double`].
    #[default]
    Double,
}

impl Precision {
    /// Converts a constant to a value of this precision.
    pub fn value(&self, n: f64) -> Value {
        match self {
            Precision::Single => Value::Single(n as f32),
            Precision::Double => Value::Double(n),
        }
    }
}

/// A function available for use in a context.
///
/// The function receives the evaluated arguments, and returns [`None`] if it cannot be applied to
/// them.
pub type Func = Arc<dyn Fn(&[Value]) -> Option<Value> + Send + Sync>;

/// A context to use when evaluating an expression, containing the values of variables and the
/// functions that can be used within the expression.
#[derive(Clone)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<VariableName, Value>,

    /// The functions in the context.
    funcs: HashMap<FunctionName, Func>,

    /// The precision of constants.
    pub precision: Precision,

    /// The trigonometric mode of the context.
    pub trig_mode: TrigMode,
}

impl Default for Ctxt {
    /// Creates a context with double precision, containing the constants in [`consts`].
    fn default() -> Self {
        Self::with_precision(Precision::Double)
    }
}

impl Debug for Ctxt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ctxt")
            .field("vars", &self.vars)
            .field("funcs", &self.funcs.keys().collect::<Vec<_>>())
            .field("precision", &self.precision)
            .field("trig_mode", &self.trig_mode)
            .finish()
    }
}

impl Ctxt {
    /// Creates a new empty context with double precision.
    ///
    /// The empty context does not contain any variables or functions. Consider using the
    /// [`Default`] implementation or [`Ctxt::with_precision`] to get the usual constants.
    pub fn new() -> Ctxt {
        Ctxt {
            vars: HashMap::new(),
            funcs: HashMap::new(),
            precision: Precision::default(),
            trig_mode: TrigMode::default(),
        }
    }

    /// Creates a context with the given precision, containing the constants in [`consts`] with
    /// the same precision.
    pub fn with_precision(precision: Precision) -> Ctxt {
        fn constants<T: Real>() -> [(VariableName, Value); 3]
        where
            Value: From<T> + From<Complex<T>>,
        {
            [
                (consts::E.clone(), T::e().into()),
                (consts::PI.clone(), T::pi().into()),
                (consts::I.clone(), Complex::<T>::i().into()),
            ]
        }

        let vars = match precision {
            Precision::Single => constants::<f32>(),
            Precision::Double => constants::<f64>(),
        };
        Ctxt {
            vars: HashMap::from(vars),
            precision,
            ..Ctxt::new()
        }
    }

    /// Add a variable to the context.
    pub fn add_var(&mut self, name: &VariableName, value: impl Into<Value>) {
        self.vars.insert(name.clone(), value.into());
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &VariableName) -> Option<Value> {
        self.vars.get(name).copied()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<VariableName, Value> {
        &self.vars
    }

    /// Add a function to the context.
    pub fn add_func(
        &mut self,
        name: &FunctionName,
        func: impl Fn(&[Value]) -> Option<Value> + Send + Sync + 'static,
    ) {
        self.funcs.insert(name.clone(), Arc::new(func));
    }

    /// Get a function in the context.
    pub fn get_func(&self, name: &FunctionName) -> Option<&Func> {
        self.funcs.get(name)
    }

    /// Returns all variables in the context with a label similar to the given label.
    pub fn similar_vars(&self, label: &str) -> Vec<&VariableName> {
        self.vars
            .keys()
            .filter(|name| levenshtein(name.label(), label) < 2)
            .collect()
    }

    /// Returns all functions in the context with a label similar to the given label.
    pub fn similar_funcs(&self, label: &str) -> Vec<&FunctionName> {
        self.funcs
            .keys()
            .filter(|name| levenshtein(name.label(), label) < 2)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn default_constants() {
        let ctxt = Ctxt::default();
        assert_eq!(ctxt.get_var(&consts::PI), Some(Value::Double(std::f64::consts::PI)));
        assert_eq!(ctxt.get_var(&consts::I), Some(Value::DoubleComplex(Complex::new(0.0, 1.0))));

        let ctxt = Ctxt::with_precision(Precision::Single);
        assert_eq!(ctxt.get_var(&consts::E), Some(Value::Single(std::f32::consts::E)));
        assert!(Ctxt::new().get_vars().is_empty());
    }

    #[test]
    fn similar_names() {
        let mut ctxt = Ctxt::new();
        let x = VariableName::labeled("x");
        let xy = VariableName::labeled("xy");
        let width = VariableName::labeled("width");
        ctxt.add_var(&x, 1.0);
        ctxt.add_var(&xy, 2.0);
        ctxt.add_var(&width, 3.0);

        let mut similar = ctxt.similar_vars("y")
            .into_iter()
            .map(|name| name.label())
            .collect::<Vec<_>>();
        similar.sort_unstable();
        assert_eq!(similar, vec!["x", "xy"]);

        let f = FunctionName::labeled("sqrt");
        ctxt.add_func(&f, |args| args.first().copied());
        assert_eq!(ctxt.similar_funcs("sqr"), vec![&f]);
        assert!(ctxt.similar_funcs("cbrt").is_empty());
    }
}
