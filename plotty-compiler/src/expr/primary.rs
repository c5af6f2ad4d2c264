use levenshtein::levenshtein;
use plotty_compute::{consts, funcs, symbolic::Primary};
use crate::{
    error::{UnknownFunction, UnknownVariable, WrongArgumentCount},
    Compile,
    CompileError,
    Compiler,
    Instruction,
};

/// Returns the builtin functions with a name similar to the given name, in alphabetical order.
fn similar_funcs(name: &str) -> Vec<String> {
    let mut names = funcs::names()
        .filter(|n| levenshtein(n, name) < 2)
        .map(str::to_string)
        .collect::<Vec<_>>();
    names.sort();
    names
}

impl Compile for Primary {
    fn compile(&self, compiler: &mut Compiler) -> Result<(), CompileError> {
        match self {
            Primary::Integer(n) => compiler.add_instr(Instruction::LoadConst(n.to_f64())),
            Primary::Float(n) => compiler.add_instr(Instruction::LoadConst(n.to_f64())),
            Primary::Symbol(name) => {
                let instruction = match compiler.resolve_symbol(name) {
                    Some(slot) => Instruction::LoadVar(slot),
                    None => consts::constant_value(name)
                        .map(Instruction::LoadConst)
                        .ok_or_else(|| UnknownVariable {
                            name: name.clone(),
                            known: compiler.symbols().to_vec(),
                        })?,
                };
                compiler.add_instr(instruction)
            },
            Primary::Call(name, args) => {
                let builtin = funcs::get(name).ok_or_else(|| UnknownFunction {
                    name: name.clone(),
                    suggestions: similar_funcs(name),
                })?;
                if !builtin.arity().accepts(args.len()) {
                    return Err(WrongArgumentCount {
                        name: builtin.name(),
                        expected: builtin.arity(),
                        given: args.len(),
                    }.into());
                }

                args.iter().try_for_each(|arg| arg.compile(compiler))?;
                compiler.add_instr(Instruction::Call(builtin, args.len()))
            },
        };

        Ok(())
    }
}
