use alg_expr::{Expr, FunctionName};
use crate::{
    error::kind::{FunctionFailed, UndefinedFunction},
    value::Value,
};
use log::trace;
use super::{EvalError, Evaluator, Node};

impl Evaluator<'_> {
    /// Evaluates a call to the function with the given name. `node` is the index of the call.
    pub(super) fn eval_call(
        &mut self,
        node: usize,
        name: &FunctionName,
        args: &[Expr],
    ) -> Result<Value, EvalError> {
        let ctxt = self.ctxt;
        let Some(func) = ctxt.get_func(name) else {
            trace!("undefined function `{}`", name);
            return Err(EvalError::new(vec![Node::Operator(node)], UndefinedFunction {
                name: name.label().to_string(),
                suggestions: ctxt.similar_funcs(name.label())
                    .into_iter()
                    .map(|name| name.label().to_string())
                    .collect(),
            }));
        };

        let values = args.iter()
            .map(|arg| self.eval(arg))
            .collect::<Result<Vec<_>, _>>()?;
        func(values.as_slice()).ok_or_else(|| {
            trace!("`{}` failed on {:?}", name, values);
            EvalError::new(vec![Node::Whole(node)], FunctionFailed {
                name: name.label().to_string(),
                args: values.iter().map(Value::type_name).collect(),
            })
        })
    }
}
