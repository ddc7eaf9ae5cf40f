use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::edit::{EditOutcome, Matcher, Netlist, NetlistError};

/// Frequency-axis division for `.AC` sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepKind {
    Dec,
    Oct,
    Lin,
}

impl fmt::Display for SweepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SweepKind::Dec => "DEC",
            SweepKind::Oct => "OCT",
            SweepKind::Lin => "LIN",
        })
    }
}

impl FromStr for SweepKind {
    type Err = NetlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEC" => Ok(SweepKind::Dec),
            "OCT" => Ok(SweepKind::Oct),
            "LIN" => Ok(SweepKind::Lin),
            other => Err(NetlistError::InvalidDirective(format!(
                "sweep type must be one of DEC, OCT or LIN, got {other:?}"
            ))),
        }
    }
}

/// One simulator directive in canonical form.
///
/// Each variant knows the line it renders to and the predicate that finds
/// an earlier line of its kind, so applying a directive twice updates the
/// same line instead of duplicating it.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Dc {
        source: String,
        start: f64,
        stop: f64,
        step: f64,
    },
    Ac {
        sweep: SweepKind,
        points: u32,
        fstart: f64,
        fstop: f64,
    },
    Tran {
        step: String,
        stop: String,
        start: String,
        max_step: String,
        uic: bool,
    },
    Param {
        name: String,
        value: String,
    },
    Option {
        name: String,
        value: String,
    },
    Model {
        name: String,
        params: String,
    },
    Probe {
        nodes: Vec<String>,
    },
    Component {
        name: String,
        nodes: Vec<String>,
        value: String,
    },
}

impl Directive {
    /// `.DC` sweep of a source.
    pub fn dc(source: impl Into<String>, start: f64, stop: f64, step: f64) -> Self {
        Directive::Dc {
            source: source.into(),
            start,
            stop,
            step,
        }
    }

    /// `.AC` small-signal analysis. Rejects a start frequency at or above
    /// the stop frequency before anything touches the netlist.
    pub fn ac(sweep: SweepKind, points: u32, fstart: f64, fstop: f64) -> Result<Self, NetlistError> {
        if fstart >= fstop {
            return Err(NetlistError::InvalidDirective(format!(
                "start frequency {fstart} must be below stop frequency {fstop}"
            )));
        }
        Ok(Directive::Ac {
            sweep,
            points,
            fstart,
            fstop,
        })
    }

    /// `.TRAN` analysis. `start` and `max_step` default to `0` when not
    /// given; `uic` appends the use-initial-conditions flag.
    pub fn tran(
        step: impl Into<String>,
        stop: impl Into<String>,
        start: Option<&str>,
        max_step: Option<&str>,
        uic: bool,
    ) -> Self {
        Directive::Tran {
            step: step.into(),
            stop: stop.into(),
            start: start.unwrap_or("0").to_owned(),
            max_step: max_step.unwrap_or("0").to_owned(),
            uic,
        }
    }

    /// `.PARAM name=value`. Repeated application updates the same
    /// parameter rather than appending a second definition.
    pub fn param(name: impl Into<String>, value: impl Into<String>) -> Self {
        Directive::Param {
            name: name.into(),
            value: value.into(),
        }
    }

    /// `.OPTIONS name=value`, one directive per option.
    pub fn option(name: impl Into<String>, value: impl Into<String>) -> Self {
        Directive::Option {
            name: name.into(),
            value: value.into(),
        }
    }

    /// `.MODEL name params`, matched and replaced by model name.
    pub fn model(name: impl Into<String>, params: impl Into<String>) -> Self {
        Directive::Model {
            name: name.into(),
            params: params.into(),
        }
    }

    /// `.PROBE` over an explicit node list.
    pub fn probe<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Directive::Probe {
            nodes: nodes.into_iter().map(|n| n.into()).collect(),
        }
    }

    /// A component declaration line: name, connection nodes, value.
    pub fn component<I, S>(name: impl Into<String>, nodes: I, value: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Directive::Component {
            name: name.into(),
            nodes: nodes.into_iter().map(|n| n.into()).collect(),
            value: value.into(),
        }
    }

    /// The predicate that locates an existing line of this directive kind.
    pub fn matcher(&self) -> Matcher {
        match self {
            Directive::Dc { .. } => Matcher::keyword("DC"),
            Directive::Ac { .. } => Matcher::keyword("AC"),
            Directive::Tran { .. } => Matcher::keyword("TRAN"),
            Directive::Param { name, .. } => Matcher::keyword_with_name("PARAM", name),
            Directive::Option { name, .. } => Matcher::keyword_with_name("OPTIONS", name),
            Directive::Model { name, .. } => Matcher::keyword_with_name("MODEL", name),
            Directive::Probe { .. } => Matcher::sentinel(),
            Directive::Component { name, .. } => Matcher::component(name),
        }
    }

    /// The canonical netlist line for this directive.
    pub fn line(&self) -> String {
        match self {
            Directive::Dc {
                source,
                start,
                stop,
                step,
            } => format!(".DC {source} {start} {stop} {step}"),
            Directive::Ac {
                sweep,
                points,
                fstart,
                fstop,
            } => format!(".AC {sweep} {points} {fstart} {fstop}"),
            Directive::Tran {
                step,
                stop,
                start,
                max_step,
                uic,
            } => {
                let mut line = format!(".TRAN {step} {stop} {start} {max_step}");
                if *uic {
                    line.push_str(" UIC");
                }
                line
            }
            Directive::Param { name, value } => format!(".PARAM {name}={value}"),
            Directive::Option { name, value } => format!(".OPTIONS {name}={value}"),
            Directive::Model { name, params } => format!(".MODEL {name} {params}"),
            Directive::Probe { nodes } => format!(".PROBE {}", nodes.iter().join(" ")),
            Directive::Component { name, nodes, value } => {
                let mut parts = Vec::with_capacity(nodes.len() + 2);
                parts.push(name.as_str());
                parts.extend(nodes.iter().map(String::as_str));
                parts.push(value.as_str());
                parts.join(" ")
            }
        }
    }
}

impl Netlist {
    /// Write `directive` into the netlist: the first line of its kind is
    /// rewritten, otherwise the canonical line is inserted ahead of the
    /// `.END` terminator.
    pub fn apply(&self, directive: &Directive) -> Result<EditOutcome, NetlistError> {
        self.find_and_replace(&directive.matcher(), &directive.line())
    }
}
