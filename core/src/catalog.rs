use crate::grid::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Low,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Low, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Low => "Low",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// Per-letter coordinate step.
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Across => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// One answer placed in the grid. The answer length determines the span of
/// occupied cells from the start coordinate.
#[derive(Clone, Copy, Debug)]
pub struct WordDef {
    pub id: &'static str,
    pub answer: &'static str,
    pub clue: &'static str,
    pub start_x: i32,
    pub start_y: i32,
    pub direction: Direction,
}

impl WordDef {
    pub fn start(&self) -> Cell {
        Cell::new(self.start_x, self.start_y)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let (dx, dy) = self.direction.step();
        (0..self.answer.len() as i32)
            .map(move |i| Cell::new(self.start_x + dx * i, self.start_y + dy * i))
    }

    pub fn letters(&self) -> impl Iterator<Item = (Cell, char)> + '_ {
        self.cells()
            .zip(self.answer.chars().map(|ch| ch.to_ascii_uppercase()))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PuzzleDef {
    pub id: u32,
    pub topic: &'static str,
    pub width: u32,
    pub height: u32,
    pub words: &'static [WordDef],
    pub difficulty: Option<Difficulty>,
}

pub const PUZZLE_WIDTH: u32 = 14;
pub const PUZZLE_HEIGHT: u32 = 14;

const fn across(
    id: &'static str,
    answer: &'static str,
    clue: &'static str,
    start_x: i32,
    start_y: i32,
) -> WordDef {
    WordDef {
        id,
        answer,
        clue,
        start_x,
        start_y,
        direction: Direction::Across,
    }
}

const fn down(
    id: &'static str,
    answer: &'static str,
    clue: &'static str,
    start_x: i32,
    start_y: i32,
) -> WordDef {
    WordDef {
        id,
        answer,
        clue,
        start_x,
        start_y,
        direction: Direction::Down,
    }
}

const fn puzzle(
    id: u32,
    topic: &'static str,
    difficulty: Difficulty,
    words: &'static [WordDef],
) -> PuzzleDef {
    PuzzleDef {
        id,
        topic,
        width: PUZZLE_WIDTH,
        height: PUZZLE_HEIGHT,
        words,
        difficulty: Some(difficulty),
    }
}

// Hand-authored fixtures. Each puzzle leads with one vertical backbone word
// that every across word intersects at the matching letter, so the set stays
// valid without a generator.
pub const PUZZLES: &[PuzzleDef] = &[
    puzzle(
        1,
        "DNA Structure",
        Difficulty::Low,
        &[
            down("D1", "GENOME", "Complete set of DNA", 4, 0),
            across("A1", "GENE", "Unit of heredity", 4, 0),
            across("A2", "HELIX", "Spiral shape", 3, 1),
            across("A3", "INTRON", "Non-coding sequence", 2, 2),
            across("A4", "CODON", "Triplet code", 3, 3),
            across("A5", "PRIMER", "Replication starter", 1, 4),
            across("A6", "BASE", "A, T, C, or G", 1, 5),
        ],
    ),
    puzzle(
        2,
        "Mendelian Genetics",
        Difficulty::Low,
        &[
            down("D1", "ALLELE", "Variant form of a gene", 5, 0),
            across("A1", "TRAIT", "Observable feature", 3, 0),
            across("A2", "LOCUS", "Gene position", 5, 1),
            across("A3", "SELF", "____-fertilization", 3, 2),
            across("A4", "PEA", "Mendel's plant", 4, 3),
            across("A5", "LAW", "____ of segregation", 5, 4),
            across("A6", "RECESSIVE", "Masked trait", 4, 5),
        ],
    ),
    puzzle(
        3,
        "Central Dogma",
        Difficulty::Low,
        &[
            down("D1", "PROTEIN", "Final gene product", 5, 0),
            across("A1", "POL", "Polymerase (abbr)", 5, 0),
            across("A2", "RNA", "Transcription output", 5, 1),
            across("A3", "CODING", "____ strand", 4, 2),
            across("A4", "TRNA", "Adapter molecule", 5, 3),
            across("A5", "GENE", "DNA segment", 4, 4),
            across("A6", "SITE", "Active ____", 4, 5),
            across("A7", "NUCLEUS", "Transcription location", 5, 6),
        ],
    ),
    puzzle(
        4,
        "Replication",
        Difficulty::Low,
        &[
            down("D1", "LIGASE", "Molecular glue", 4, 0),
            across("A1", "LAG", "____ strand", 4, 0),
            across("A2", "ORIGIN", "Start site", 2, 1),
            across("A3", "GAP", "Missing bases", 4, 2),
            across("A4", "DNA", "Template", 2, 3),
            across("A5", "SINGLE", "____ stranded binding protein", 4, 4),
            across("A6", "END", "5 prime ____", 4, 5),
        ],
    ),
    puzzle(
        5,
        "Transcription",
        Difficulty::Low,
        &[
            down("D1", "PROMOTER", "Start signal", 4, 0),
            across("A1", "POL", "Enzyme", 4, 0),
            across("A2", "MRNA", "Messenger", 3, 1),
            across("A3", "BOX", "TATA ____", 3, 2),
            across("A4", "MATURE", "Processed RNA", 4, 3),
            across("A5", "CORE", "____ enzyme", 3, 4),
            across("A6", "TERM", "End signal", 4, 5),
            across("A7", "EXON", "Kept sequence", 4, 6),
            across("A8", "RHO", "Termination factor", 4, 7),
        ],
    ),
    puzzle(
        6,
        "Translation",
        Difficulty::Low,
        &[
            down("D1", "RIBOSOME", "Protein factory", 4, 0),
            across("A1", "RRNA", "Structural RNA", 4, 0),
            across("A2", "SITE", "A, P, or E ____", 3, 1),
            across("A3", "BOND", "Peptide ____", 4, 2),
            across("A4", "CODON", "Code triplet", 3, 3),
            across("A5", "STOP", "UAA, UAG, UGA", 4, 4),
            across("A6", "OPEN", "____ reading frame", 4, 5),
            across("A7", "MET", "Start amino acid (abbr)", 4, 6),
            across("A8", "EXIT", "E site function", 4, 7),
        ],
    ),
    puzzle(
        7,
        "Mutations",
        Difficulty::Low,
        &[
            down("D1", "MUTATION", "DNA change", 5, 0),
            across("A1", "MISSENSE", "Amino acid change", 5, 0),
            across("A2", "UV", "Radiation cause", 5, 1),
            across("A3", "TRUE", "____ reversion", 5, 2),
            across("A4", "BASE", "Analog", 4, 3),
            across("A5", "TRANS", "____-version", 5, 4),
            across("A6", "INDEL", "Insert/Delete", 5, 5),
            across("A7", "LOSS", "____ of function", 4, 6),
            across("A8", "NULL", "No function", 5, 7),
        ],
    ),
    puzzle(
        8,
        "Operons",
        Difficulty::Medium,
        &[
            down("D1", "REPRESSOR", "Turns off operon", 5, 0),
            across("A1", "REG", "____-ulatory gene", 5, 0),
            across("A2", "EFFECTOR", "Binds repressor", 5, 1),
            across("A3", "PROMOTER", "RNA pol site", 5, 2),
            across("A4", "RNA", "Polymerase", 5, 3),
            across("A5", "EXPRESS", "Make protein", 5, 4),
            across("A6", "STRUCTURAL", "____ genes", 5, 5),
            across("A7", "SITE", "Binding ____", 5, 6),
            across("A8", "OPERATOR", "Control switch", 5, 7),
            across("A9", "READ", "Transcription", 5, 8),
        ],
    ),
    puzzle(
        9,
        "Gene Regulation",
        Difficulty::Medium,
        &[
            down("D1", "ENHANCER", "Distant control element", 4, 0),
            across("A1", "EXON", "Coding part", 4, 0),
            across("A2", "NUCLEOSOME", "DNA spool", 4, 1),
            across("A3", "HELIX", "Loop", 4, 2),
            across("A4", "ACT", "____-ivator", 4, 3),
            across("A5", "NON", "____-coding", 4, 4),
            across("A6", "CAP", "5 prime ____", 4, 5),
            across("A7", "ELEMENT", "Response ____", 4, 6),
            across("A8", "RNA", "Product", 4, 7),
        ],
    ),
    puzzle(
        10,
        "Bacterial Genetics",
        Difficulty::Medium,
        &[
            down("D1", "CONJUGATION", "Bacterial mating", 6, 0),
            across("A1", "CELL", "Unit", 6, 0),
            across("A2", "ORI", "Origin", 6, 1),
            across("A3", "NUCLEOID", "DNA region", 6, 2),
            across("A4", "JUMP", "Transposon move", 6, 3),
            across("A5", "UPTAKE", "Transformation", 6, 4),
            across("A6", "GENE", "Unit", 6, 5),
            across("A7", "AUXOTROPH", "Mutant", 6, 6),
            across("A8", "TRANSDUCTION", "Viral transfer", 6, 7),
            across("A9", "IS", "Insertion Sequence", 6, 8),
            across("A10", "OPERON", "Gene cluster", 6, 9),
            across("A11", "NULL", "Zero", 6, 10),
        ],
    ),
    puzzle(
        11,
        "DNA Repair",
        Difficulty::Medium,
        &[
            down("D1", "EXCISION", "Repair by removal", 5, 0),
            across("A1", "ERROR", "Mistake", 5, 0),
            across("A2", "XP", "Xeroderma Pigmentosum", 5, 1),
            across("A3", "CUT", "Nick", 5, 2),
            across("A4", "INS", "Insert", 5, 3),
            across("A5", "SOS", "Emergency repair", 5, 4),
            across("A6", "INVERT", "Flip", 5, 5),
            across("A7", "OLD", "Parent strand", 5, 6),
            across("A8", "NER", "Nucleotide Excision Repair", 5, 7),
        ],
    ),
    puzzle(
        12,
        "Genomics",
        Difficulty::Medium,
        &[
            down("D1", "SEQUENCE", "Determine base order", 5, 0),
            across("A1", "SNP", "Variation", 5, 0),
            across("A2", "EXOME", "Coding genes", 5, 1),
            across("A3", "QTL", "Trait locus", 5, 2),
            across("A4", "UNIQUE", "Not repetitive", 5, 3),
            across("A5", "EST", "Expressed Sequence Tag", 5, 4),
            across("A6", "NEXT", "____ Gen Sequencing", 5, 5),
            across("A7", "CONTIG", "Overlap set", 5, 6),
            across("A8", "END", "Pair reads", 5, 7),
        ],
    ),
    puzzle(
        13,
        "Cloning",
        Difficulty::Medium,
        &[
            down("D1", "PLASMID", "Vector", 4, 0),
            across("A1", "PCR", "Amplification", 4, 0),
            across("A2", "LIBRARY", "Clone collection", 4, 1),
            across("A3", "AMP", "Resistance gene", 4, 2),
            across("A4", "SCREEN", "Find colony", 4, 3),
            across("A5", "MCS", "Cloning site", 4, 4),
            across("A6", "INSERT", "DNA added", 4, 5),
            across("A7", "DIGEST", "Cut with enzyme", 4, 6),
        ],
    ),
    puzzle(
        14,
        "Cell Cycle",
        Difficulty::Medium,
        &[
            down("D1", "MITOSIS", "Nuclear division", 4, 0),
            across("A1", "META", "____-phase", 4, 0),
            across("A2", "INTER", "____-phase", 4, 1),
            across("A3", "TELO", "____-phase", 4, 2),
            across("A4", "ONCO", "____-gene", 4, 3),
            across("A5", "SISTER", "Chromatid", 4, 4),
            across("A6", "IF", "Intermediate filament", 4, 5),
            across("A7", "SPINDLE", "Microtubules", 4, 6),
        ],
    ),
    puzzle(
        15,
        "CRISPR",
        Difficulty::Hard,
        &[
            down("D1", "EDITING", "Genome modification", 4, 0),
            across("A1", "EFFECT", "Off-target ____", 4, 0),
            across("A2", "DSB", "Double strand break", 4, 1),
            across("A3", "INDEL", "NHEJ result", 4, 2),
            across("A4", "TARGET", "DNA sequence", 4, 3),
            across("A5", "IMMUNE", "Bacterial system", 4, 4),
            across("A6", "NUCLEASE", "Cas9 function", 4, 5),
            across("A7", "GUIDE", "____ RNA", 4, 6),
        ],
    ),
    puzzle(
        16,
        "Development",
        Difficulty::Hard,
        &[
            down("D1", "HOMEOTIC", "Body plan gene", 5, 0),
            across("A1", "HOX", "Cluster", 5, 0),
            across("A2", "ORGANIZE", "Spemann ____", 5, 1),
            across("A3", "MORPHOGEN", "Signal gradient", 5, 2),
            across("A4", "EGG", "Oocyte", 5, 3),
            across("A5", "OOCYTE", "Egg cell", 5, 4),
            across("A6", "TOTI", "____-potent", 5, 5),
            across("A7", "IN", "Inside", 5, 6),
            across("A8", "CELL", "Unit", 5, 7),
        ],
    ),
    puzzle(
        17,
        "Cancer Genetics",
        Difficulty::Hard,
        &[
            down("D1", "TUMOR", "Mass of cells", 4, 0),
            across("A1", "TWO", "____-hit hypothesis", 4, 0),
            across("A2", "USP", "Deubiquitinase", 4, 1),
            across("A3", "METASTASIS", "Spread", 4, 2),
            across("A4", "ONCO", "Gene type", 4, 3),
            across("A5", "RB", "Retinoblastoma", 4, 4),
        ],
    ),
    puzzle(
        18,
        "Epigenetics",
        Difficulty::Hard,
        &[
            down("D1", "METHYL", "CH3 group", 4, 0),
            across("A1", "MOD", "Change", 4, 0),
            across("A2", "EPI", "Above", 4, 1),
            across("A3", "TAIL", "Histone ____", 4, 2),
            across("A4", "HAT", "Acetylator", 4, 3),
            across("A5", "YELLOW", "Agouti color", 4, 4),
            across("A6", "LYSINE", "Modified AA", 4, 5),
        ],
    ),
    puzzle(
        19,
        "RNA Interference",
        Difficulty::Hard,
        &[
            down("D1", "SILENCE", "Reduce expression", 4, 0),
            across("A1", "SIRNA", "Short interfering", 4, 0),
            across("A2", "RISC", "Complex", 3, 1),
            across("A3", "LONG", "____ dsRNA", 4, 2),
            across("A4", "EXPRESS", "Transcription", 4, 3),
            across("A5", "NONE", "Zero", 4, 4),
            across("A6", "CUT", "Dice", 4, 5),
            across("A7", "ELEGANS", "Worm model", 4, 6),
        ],
    ),
    puzzle(
        20,
        "Model Organisms",
        Difficulty::Hard,
        &[
            down("D1", "ELEGANS", "C. ____ (Worm)", 5, 0),
            across("A1", "ECOLI", "Bacterium", 5, 0),
            across("A2", "LINEAGE", "Cell mapping", 5, 1),
            across("A3", "EMBRYO", "Early stage", 5, 2),
            across("A4", "GENETICS", "Study", 5, 3),
            across("A5", "ARABIDOPSIS", "Plant model", 5, 4),
            across("A6", "NULL", "Mutant type", 5, 5),
            across("A7", "SCREEN", "Search method", 5, 6),
        ],
    ),
    puzzle(
        21,
        "Advanced Genomics",
        Difficulty::Hard,
        &[
            down("D1", "SYNTHETIC", "Artificial biology", 4, 0),
            across("A1", "SYSTEMS", "____ biology", 4, 0),
            across("A2", "YEAST", "Sc2.0 organism", 4, 1),
            across("A3", "NETWORK", "Interaction map", 4, 2),
            across("A4", "TOP", "____-down", 4, 3),
            across("A5", "HOST", "Chassis", 4, 4),
            across("A6", "ENCODE", "Project name", 4, 5),
            across("A7", "TALEN", "Editor", 4, 6),
            across("A8", "IN", "Inside", 4, 7),
            across("A9", "CIRCUIT", "Gene ____", 4, 8),
        ],
    ),
];

pub fn puzzle_by_id(id: u32) -> Option<&'static PuzzleDef> {
    PUZZLES.iter().find(|puzzle| puzzle.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let mut seen = HashSet::new();
        for puzzle in PUZZLES {
            assert!(seen.insert(puzzle.id), "duplicate puzzle id {}", puzzle.id);
        }
    }

    #[test]
    fn seven_puzzles_per_difficulty() {
        for difficulty in Difficulty::ALL {
            let count = PUZZLES
                .iter()
                .filter(|puzzle| puzzle.difficulty == Some(difficulty))
                .count();
            assert_eq!(count, 7, "{} puzzles", difficulty.label());
        }
    }

    #[test]
    fn word_starts_are_inside_the_grid() {
        // A handful of long answers overrun the right edge; only the start
        // coordinate is guaranteed in bounds.
        for puzzle in PUZZLES {
            for word in puzzle.words {
                let start = word.start();
                assert!(
                    start.x >= 0
                        && start.y >= 0
                        && (start.x as u32) < puzzle.width
                        && (start.y as u32) < puzzle.height,
                    "puzzle {} word {} starts outside the grid at {}",
                    puzzle.id,
                    word.id,
                    start
                );
            }
        }
    }

    #[test]
    fn every_puzzle_leads_with_a_down_backbone() {
        for puzzle in PUZZLES {
            let first = puzzle.words.first().expect("fixture has words");
            assert_eq!(first.direction, Direction::Down, "puzzle {}", puzzle.id);
            let span: Vec<Cell> = first.cells().collect();
            for word in &puzzle.words[1..] {
                assert!(
                    word.cells().any(|cell| span.contains(&cell)),
                    "puzzle {} word {} misses the backbone",
                    puzzle.id,
                    word.id
                );
            }
        }
    }

    #[test]
    fn answers_are_uppercase_letters() {
        for puzzle in PUZZLES {
            for word in puzzle.words {
                assert!(
                    !word.answer.is_empty()
                        && word.answer.chars().all(|ch| ch.is_ascii_uppercase()),
                    "puzzle {} word {}",
                    puzzle.id,
                    word.id
                );
            }
        }
    }

    #[test]
    fn lookup_by_id() {
        let found = puzzle_by_id(1).expect("puzzle 1 exists");
        assert_eq!(found.topic, "DNA Structure");
        assert!(puzzle_by_id(999).is_none());
    }
}
