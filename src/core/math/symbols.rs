//! Static macro name → Unicode glyph table.
//!
//! Keys are control sequence names without the leading backslash. The map is
//! generated at compile time, so lookups never allocate and the table is never
//! rebuilt per call.

use phf::phf_map;

pub static SYMBOLS: phf::Map<&'static str, &'static str> = phf_map! {
    // Greek, lowercase
    "alpha" => "α",
    "beta" => "β",
    "gamma" => "γ",
    "delta" => "δ",
    "epsilon" => "ε",
    "varepsilon" => "ε",
    "zeta" => "ζ",
    "eta" => "η",
    "theta" => "θ",
    "vartheta" => "ϑ",
    "iota" => "ι",
    "kappa" => "κ",
    "lambda" => "λ",
    "mu" => "μ",
    "nu" => "ν",
    "xi" => "ξ",
    "pi" => "π",
    "rho" => "ρ",
    "sigma" => "σ",
    "tau" => "τ",
    "upsilon" => "υ",
    "phi" => "φ",
    "varphi" => "φ",
    "chi" => "χ",
    "psi" => "ψ",
    "omega" => "ω",
    // Greek, uppercase
    "Gamma" => "Γ",
    "Delta" => "Δ",
    "Theta" => "Θ",
    "Lambda" => "Λ",
    "Xi" => "Ξ",
    "Pi" => "Π",
    "Sigma" => "Σ",
    "Upsilon" => "Υ",
    "Phi" => "Φ",
    "Psi" => "Ψ",
    "Omega" => "Ω",
    // Arithmetic and relations
    "times" => "×",
    "cdot" => "·",
    "div" => "÷",
    "pm" => "±",
    "mp" => "∓",
    "infty" => "∞",
    "approx" => "≈",
    "neq" => "≠",
    "ne" => "≠",
    "leq" => "≤",
    "le" => "≤",
    "geq" => "≥",
    "ge" => "≥",
    "equiv" => "≡",
    "sim" => "∼",
    "propto" => "∝",
    "circ" => "∘",
    "degree" => "°",
    "ldots" => "…",
    "cdots" => "⋯",
    // Calculus
    "partial" => "∂",
    "nabla" => "∇",
    "sum" => "∑",
    "prod" => "∏",
    "int" => "∫",
    "oint" => "∮",
    // Sets and logic
    "in" => "∈",
    "notin" => "∉",
    "subset" => "⊂",
    "subseteq" => "⊆",
    "supset" => "⊃",
    "cup" => "∪",
    "cap" => "∩",
    "emptyset" => "∅",
    "forall" => "∀",
    "exists" => "∃",
    "neg" => "¬",
    "land" => "∧",
    "lor" => "∨",
    "therefore" => "∴",
    // Arrows
    "Rightarrow" => "⇒",
    "Leftarrow" => "⇐",
    "Leftrightarrow" => "⇔",
    "implies" => "⟹",
    "iff" => "⟺",
    "rightarrow" => "→",
    "to" => "→",
    "leftarrow" => "←",
    "mapsto" => "↦",
    // Geometry
    "angle" => "∠",
    "perp" => "⊥",
    "parallel" => "∥",
};

/// Look up the glyph for a macro name (without the backslash).
pub fn lookup(name: &str) -> Option<&'static str> {
    SYMBOLS.get(name).copied()
}
