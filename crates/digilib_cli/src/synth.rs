//! `digilib synth`: build one component and print it.

use digilib_common::Interner;

use crate::report::{self, ComponentReport};
use crate::{GlobalArgs, SynthArgs};

/// Runs the `digilib synth` command. Returns exit code 0 on success.
pub fn run(args: &SynthArgs, _global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let spec = args.component.spec()?;
    let name = args.component.name();
    let interner = Interner::new();
    let component = digilib_synth::synthesize(&interner, &name, &spec)?;
    let report = ComponentReport::new(&component, &interner, args.qualify);
    print!("{}", report::render(&[report], args.format)?);
    Ok(0)
}
