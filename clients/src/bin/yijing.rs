//! `yijing` - Inspects hexagrams, trigrams, partitions, sequences and codons.
//!
//! **Usage:**
//! ```
//! yijing [--json] [--verbose] hexagram <H>
//! yijing [--json] trigram <T>
//! yijing [--json] groups <symmetry|mantra|balance|transition|amino>
//! yijing [--json] sequence <binary|gray|kingwen|palaces|bagua|early|later>
//! yijing [--json] codon <CODON>
//! yijing [--json] relation <A> <B>
//! ```
//!
//! Hexagrams are read as `0b101010`, a six-character line string from the
//! bottom line up (`101010`), or a decimal value 0-63.

#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        missing_docs,
        clippy::missing_errors_doc
    )
)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use yijing::classify::{balance_class, mantra, relation, symmetry, Relation};
use yijing::sequence::king_wen;
use yijing::{
    AminoAcid, Balance, Codon, Element, GroupKind, Hexagram, Mantra, Orbit,
    SequenceKind, Sixiang, Symmetry, Transition, Trigram,
};
use yijing_clients::logging::{self, TracingConfig};

/// Inspect the Yijing hexagram algebra.
#[derive(Parser)]
#[command(name = "yijing", about = "Inspect the Yijing hexagram algebra")]
struct Args {
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level unless YIJING_LOG or RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Everything known about one hexagram.
    Hexagram {
        /// Binary literal, line string or decimal value.
        hexagram: String,
    },
    /// Name, image and element of a trigram.
    Trigram {
        /// Name, image or decimal value 0-7.
        trigram: String,
    },
    /// Members of each class of a standard partition.
    Groups {
        /// symmetry, mantra, balance, transition or amino.
        kind: String,
    },
    /// A traditional ordering of all 64 hexagrams.
    Sequence {
        /// binary, gray, kingwen, palaces, bagua, early or later.
        kind: String,
    },
    /// The hexagram and amino acid of a codon.
    Codon {
        /// Three bases, DNA or RNA letters.
        codon: String,
    },
    /// The transform that carries one hexagram to another.
    Relation {
        /// Source hexagram.
        a: String,
        /// Target hexagram.
        b: String,
    },
}

#[derive(Serialize)]
struct HexagramView {
    value: u8,
    binary: String,
    symbol: char,
    king_wen: u8,
    name: &'static str,
    title: &'static str,
    upper: TrigramView,
    lower: TrigramView,
    palace: &'static str,
    symmetry: Symmetry,
    mantra: Mantra,
    balance: Balance,
    transition: Transition,
    sixiang: Sixiang,
    root: Hexagram,
    depth: u8,
    center_chain: Vec<Hexagram>,
    orbit: Orbit,
    neighbors: Vec<Hexagram>,
    entropy: f64,
    codon: Codon,
    amino_acid: AminoAcid,
}

impl HexagramView {
    fn new(h: Hexagram) -> Self {
        let codon = Codon::from_hexagram(h);
        Self {
            value: h.value(),
            binary: format!("{:06b}", h.value()),
            symbol: h.symbol(),
            king_wen: h.king_wen_number(),
            name: h.name(),
            title: h.title(),
            upper: TrigramView::new(h.upper()),
            lower: TrigramView::new(h.lower()),
            palace: king_wen::palace(h).name(),
            symmetry: symmetry(h),
            mantra: mantra(h),
            balance: balance_class(h),
            transition: h.transition(),
            sixiang: h.sixiang(),
            root: h.root(),
            depth: h.depth(),
            center_chain: h.center_chain(),
            orbit: h.orbit(),
            neighbors: h.neighbors().to_vec(),
            entropy: h.entropy(),
            codon,
            amino_acid: codon.amino_acid(),
        }
    }

    fn print(&self) {
        println!(
            "{} {}  King Wen {}  {} ({})",
            self.symbol, self.binary, self.king_wen, self.name, self.title
        );
        println!("  value:       {}", self.value);
        println!("  upper:       {} {}", self.upper.symbol, self.upper.name);
        println!("  lower:       {} {}", self.lower.symbol, self.lower.name);
        println!("  palace:      {}", self.palace);
        println!("  symmetry:    {}", self.symmetry);
        println!("  mantra:      {}", self.mantra);
        println!("  transition:  {}", self.transition);
        println!("  sixiang:     {}", self.sixiang);
        println!("  center:      {}", join(&self.center_chain, " -> "));
        println!(
            "  orbit:       invert {} opposite {} reverse {}",
            self.orbit.inverted.value(),
            self.orbit.opposite.value(),
            self.orbit.reversed.value()
        );
        println!("  neighbors:   {}", join(&self.neighbors, " "));
        println!("  entropy:     {:.3}", self.entropy);
        println!("  codon:       {} ({})", self.codon, self.amino_acid);
    }
}

#[derive(Serialize)]
struct TrigramView {
    value: u8,
    symbol: char,
    name: &'static str,
    image: &'static str,
    element: Element,
    sixiang: Sixiang,
}

impl TrigramView {
    fn new(t: Trigram) -> Self {
        Self {
            value: t.value(),
            symbol: t.symbol(),
            name: t.name(),
            image: t.image(),
            element: t.element(),
            sixiang: t.sixiang(),
        }
    }

    fn print(&self) {
        println!("{} {:03b}  {} ({})", self.symbol, self.value, self.name, self.image);
        println!("  element: {}", self.element);
        println!("  sixiang: {}", self.sixiang);
    }
}

#[derive(Serialize)]
struct RelationView {
    a: Hexagram,
    b: Hexagram,
    relation: Relation,
    code: char,
}

fn join(items: &[Hexagram], sep: &str) -> String {
    items
        .iter()
        .map(|h| h.value().to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

fn parse_hexagram(input: &str) -> Result<Hexagram> {
    input
        .parse()
        .with_context(|| format!("`{input}` is not a hexagram"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{text}");
    Ok(())
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Hexagram { hexagram } => {
            let h = parse_hexagram(&hexagram)?;
            info!(value = h.value(), "hexagram");
            let view = HexagramView::new(h);
            if args.json {
                print_json(&view)?;
            } else {
                view.print();
            }
        }
        Command::Trigram { trigram } => {
            let t: Trigram = trigram
                .parse()
                .with_context(|| format!("`{trigram}` is not a trigram"))?;
            info!(value = t.value(), "trigram");
            let view = TrigramView::new(t);
            if args.json {
                print_json(&view)?;
            } else {
                view.print();
            }
        }
        Command::Groups { kind } => {
            let kind: GroupKind = kind.parse().context("choosing a partition")?;
            info!(%kind, "groups");
            let groups = kind.labelled();
            if args.json {
                let map: serde_json::Map<String, serde_json::Value> = groups
                    .iter()
                    .map(|(label, set)| Ok((label.to_string(), serde_json::to_value(set)?)))
                    .collect::<Result<_, serde_json::Error>>()
                    .context("serializing groups")?;
                print_json(&map)?;
            } else {
                for (label, set) in groups {
                    println!("{label} ({}): {}", set.len(), join(&set.to_vec(), " "));
                }
            }
        }
        Command::Sequence { kind } => {
            let kind: SequenceKind = kind.parse().context("choosing a sequence")?;
            info!(%kind, "sequence");
            let sequence = kind.sequence();
            if args.json {
                print_json(sequence)?;
            } else {
                println!("{kind}");
                for (i, h) in sequence.iter().enumerate() {
                    println!("{:>2}  {} {:06b}  {}", i + 1, h, h.value(), h.name());
                }
            }
        }
        Command::Codon { codon } => {
            let c: Codon = codon
                .parse()
                .with_context(|| format!("`{codon}` is not a codon"))?;
            info!(%c, "codon");
            let view = HexagramView::new(c.to_hexagram());
            if args.json {
                print_json(&view)?;
            } else {
                println!("{c} encodes {}", c.amino_acid());
                view.print();
            }
        }
        Command::Relation { a, b } => {
            let view = {
                let a = parse_hexagram(&a)?;
                let b = parse_hexagram(&b)?;
                let relation = relation(a, b);
                RelationView {
                    a,
                    b,
                    relation,
                    code: relation.code(),
                }
            };
            info!(code = %view.code, "relation");
            if args.json {
                print_json(&view)?;
            } else {
                println!(
                    "{} {} {} {}",
                    view.a.value(),
                    view.relation.emoji(),
                    view.code,
                    view.b.value()
                );
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&TracingConfig::from_env().verbose(args.verbose))
        .context("installing the tracing subscriber")?;
    run(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let args = Args::try_parse_from(["yijing", "hexagram", "42", "--json"]).unwrap();
        assert!(args.json);
        assert!(matches!(args.command, Command::Hexagram { ref hexagram } if hexagram == "42"));
    }

    #[test]
    fn hexagram_view_of_zhun() {
        let view = HexagramView::new(Hexagram::new(34));
        assert_eq!(view.king_wen, 3);
        assert_eq!(view.binary, "100010");
        assert_eq!(view.center_chain, vec![Hexagram::new(34), Hexagram::new(1), Hexagram::new(0)]);
        assert_eq!(view.codon.to_string(), "GAG");
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["root"], 0);
        assert_eq!(json["upper"]["name"], "kan");
    }

    #[test]
    fn bad_input_is_an_error() {
        assert!(parse_hexagram("1234567").is_err());
        assert!(run(Args::try_parse_from(["yijing", "codon", "AXG"]).unwrap()).is_err());
        assert!(run(Args::try_parse_from(["yijing", "groups", "olympian"]).unwrap()).is_err());
    }
}
