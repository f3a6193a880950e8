use {
    anyhow::{Context, Result},
    clap::Parser as _,
    quelim::{
        command_line::{Arguments, Command, Translation},
        normalizing::{
            close::close, dnf::dnf, linearize::linearize, nnf::nnf, pnf::pnf, simplify::simplify,
        },
        proving::Prover,
        syntax_tree::fol::Formula,
    },
    std::{
        fs::read_to_string,
        io::{self, Read as _},
        path::PathBuf,
    },
};

fn main() -> Result<()> {
    match Arguments::parse().command {
        Command::Prove {
            verbose,
            limit,
            input,
        } => {
            let content = read_input(input)?;
            let prover = Prover { limit };

            for (number, line) in formulas(&content) {
                let proof = prover
                    .prove(line)
                    .with_context(|| format!("could not decide the formula on line {number}"))?;

                if verbose {
                    print!("{proof}");
                } else {
                    println!("{}", proof.is_theorem);
                }
            }

            Ok(())
        }

        Command::Translate { with, input } => {
            let content = read_input(input)?;

            for (number, line) in formulas(&content) {
                let formula: Formula = line
                    .parse()
                    .with_context(|| format!("could not parse the formula on line {number}"))?;
                let formula = linearize(formula).with_context(|| {
                    format!("could not linearize the formula on line {number}")
                })?;

                let translated = match with {
                    Translation::Simplify => simplify(formula),
                    Translation::Nnf => nnf(formula),
                    Translation::Pnf => pnf(formula),
                    Translation::Dnf => dnf(formula),
                    Translation::Close => close(formula),
                };

                println!("{translated}");
            }

            Ok(())
        }
    }
}

fn read_input(input: Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => read_to_string(&path)
            .with_context(|| format!("could not read file `{}`", path.display())),
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("could not read standard input")?;
            Ok(content)
        }
    }
}

fn formulas(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}
