use color_print::cformat;

use crate::{assembler::Assembled, normalize::Line};

const RULE: &str = "-----------------------+-----------------------------------------";

/// Print every line with its ROM address, machine word and decoded instruction.
pub fn print_dump(path: &str, lines: &[Line], out: &Assembled) {
    println!("{}", cformat!("{}[<underline>{}</>]", RULE, path));

    let mut words = out.words.iter().enumerate().peekable();
    for (idx, line) in lines.iter().enumerate() {
        let body = match words.next_if(|(_, w)| w.line == idx) {
            Some((pc, word)) => cformat!(
                "<g>[{:04X}]</> {} | {:>4}: {:<24} <dim>{}</>",
                pc,
                word.inst.to_bin_str(),
                line.no(),
                word.inst.cformat(),
                line.raw().trim()
            ),
            None => {
                let label = line.code().trim_start_matches('(').trim_end_matches(')');
                let addr = out
                    .labels
                    .get_val(label)
                    .map(|v| format!("{:04X}", v))
                    .unwrap_or_else(|| "????".to_string());
                cformat!(
                    "{:23}| {:>4}: <c>{}</> = {}",
                    "",
                    line.no(),
                    line.code(),
                    addr
                )
            }
        };
        println!("{}", body);
    }

    println!("{}", RULE);
    for (name, addr) in &out.variables {
        println!("{}", cformat!("{:23}| <y>{:>5}</> = {}", "", addr, name));
    }
}
