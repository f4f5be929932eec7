use crate::inspect::{Inspect, Node, INVALID_SUFFIX};
use std::fmt;
use std::io::{self, Write};

const SEPARATOR: &str = "---";

/// Writes inspected values as a tab-indented text tree.
pub struct TreePrinter<W> {
    out: W,
}

impl<W: Write> TreePrinter<W> {
    pub fn new(out: W) -> Self {
        TreePrinter { out }
    }

    pub fn print<T: Inspect + ?Sized>(&mut self, name: &str, value: &T) -> io::Result<()> {
        self.print_node(name, &value.to_node(), 0)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_node(&mut self, name: &str, node: &Node<'_>, level: usize) -> io::Result<()> {
        match node {
            Node::Text(text) => {
                if text.ends_with(INVALID_SUFFIX) {
                    return Ok(());
                }
                self.line(level, format_args!("{}: {}", name, text))
            }
            Node::Struct(members) => {
                self.line(level, format_args!("{}:", name))?;
                for member in members.iter().filter(|it| it.is_exported()) {
                    self.print_node(member.name, &member.node, level + 1)?;
                }
                self.line(level, format_args!("{}", SEPARATOR))
            }
            Node::Optional(inner) => match inner {
                Some(inner) => self.print_node(name, inner, level),
                None => Ok(()),
            },
            Node::Sequence(elems) => {
                if elems.is_empty() {
                    return Ok(());
                }
                self.line(level, format_args!("{} ({} elems):", name, elems.len()))?;
                for (index, elem) in elems.iter().enumerate() {
                    self.print_node(&format!("[{}]", index), elem, level + 1)?;
                }
                Ok(())
            }
            Node::Scalar(scalar) => {
                if scalar.is_invalid() {
                    return Ok(());
                }
                self.line(level, format_args!("{}: {}", name, scalar))
            }
        }
    }

    fn line(&mut self, level: usize, args: fmt::Arguments<'_>) -> io::Result<()> {
        for _ in 0..level {
            self.out.write_all(b"\t")?;
        }
        self.out.write_fmt(args)?;
        self.out.write_all(b"\n")
    }
}

/// Renders `value` into a string, mainly useful for tests and small values.
pub fn render<T: Inspect + ?Sized>(name: &str, value: &T) -> String {
    let mut printer = TreePrinter::new(Vec::new());
    let _ = printer.print(name, value);
    String::from_utf8_lossy(&printer.into_inner()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::Member;

    #[derive(Default)]
    struct Lap {
        avg_heart_rate: u8,
        sport: Option<String>,
        hidden: u32,
    }

    impl Inspect for Lap {
        fn to_node(&self) -> Node<'_> {
            Node::Struct(vec![
                Member::new("AvgHeartRate", self.avg_heart_rate.to_node()),
                Member::new("Sport", self.sport.to_node()),
                Member::new("hidden", self.hidden.to_node()),
            ])
        }
    }

    struct Session {
        laps: Vec<Lap>,
        total_distance: Option<Box<f32>>,
        event: Marker,
    }

    impl Inspect for Session {
        fn to_node(&self) -> Node<'_> {
            Node::Struct(vec![
                Member::new("Laps", self.laps.to_node()),
                Member::new("TotalDistance", self.total_distance.to_node()),
                Member::new("Event", self.event.to_node()),
            ])
        }
    }

    struct Marker(&'static str);

    impl Inspect for Marker {
        fn to_node(&self) -> Node<'_> {
            Node::text(self.0)
        }
    }

    #[test]
    fn it_works() {
        let session = Session {
            laps: vec![
                Lap {
                    avg_heart_rate: 141,
                    sport: Some("running".to_owned()),
                    hidden: 1,
                },
                Lap {
                    avg_heart_rate: 0xFF,
                    sport: None,
                    hidden: 2,
                },
            ],
            total_distance: Some(Box::new(1500.5)),
            event: Marker("Timer"),
        };
        assert_eq!(
            render("Session", &session),
            "Session:\n\
             \tLaps (2 elems):\n\
             \t\t[0]:\n\
             \t\t\tAvgHeartRate: 141\n\
             \t\t\tSport: running\n\
             \t\t---\n\
             \t\t[1]:\n\
             \t\t---\n\
             \tTotalDistance: 1500.5\n\
             \tEvent: Timer\n\
             ---\n"
        );
    }

    #[test]
    fn unexported_members_are_skipped() {
        let lap = Lap {
            avg_heart_rate: 120,
            sport: None,
            hidden: 42,
        };
        let out = render("Lap", &lap);
        assert!(!out.contains("hidden"));
        assert!(!out.contains("42"));
    }

    #[test]
    fn optional_is_transparent() {
        assert_eq!(render("Distance", &None::<f32>), "");
        assert_eq!(render("Distance", &Some(12.5f32)), render("Distance", &12.5f32));
        assert_eq!(
            render("Lap", &Some(Box::new(Lap::default()))),
            render("Lap", &Lap::default())
        );
    }

    #[test]
    fn sequences() {
        assert_eq!(render("Records", &Vec::<u16>::new()), "");
        assert_eq!(
            render("Records", &vec![3u16, 0xFFFF, 5]),
            "Records (3 elems):\n\t[0]: 3\n\t[2]: 5\n"
        );
    }

    #[test]
    fn invalid_text_is_suppressed() {
        assert_eq!(render("Sport", &Marker("SportInvalid")), "");
        assert_eq!(render("Sport", &Marker("Invalid")), "");
        assert_eq!(render("Sport", &Marker("Invalidated")), "Sport: Invalidated\n");
        // the renderer takes precedence over the sentinel table
        assert_eq!(render("Event", &Marker("")), "Event: \n");
    }

    #[test]
    fn sentinel_scalars_are_suppressed() {
        assert_eq!(render("Cadence", &0xFFu8), "");
        assert_eq!(render("Cadence", &0xFEu8), "Cadence: 254\n");
        assert_eq!(render("Name", &String::new()), "");
        assert_eq!(render("Enabled", &false), "");
        assert_eq!(render("Enabled", &true), "Enabled: true\n");
    }

    #[test]
    fn nested_indentation() {
        let nested: Vec<Vec<i8>> = vec![vec![1, 0x7F], vec![]];
        assert_eq!(
            render("Grid", &nested),
            "Grid (2 elems):\n\t[0] (2 elems):\n\t\t[0]: 1\n"
        );
    }
}
