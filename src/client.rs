/// Flag parsing for the graphstore binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub database: String,
    pub command: String,
    pub node: Option<i64>,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut database = String::from("memory");
        let mut command = String::from("status");
        let mut node = None;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--db" | "--database" => {
                    database = iter
                        .next()
                        .ok_or_else(|| "--db requires a value".to_string())?
                        .to_string();
                }
                "--command" => {
                    command = iter
                        .next()
                        .ok_or_else(|| "--command requires a value".to_string())?
                        .to_string();
                }
                "--node" => {
                    let raw = iter
                        .next()
                        .ok_or_else(|| "--node requires a value".to_string())?;
                    node = Some(
                        raw.parse::<i64>()
                            .map_err(|_| format!("--node expects an integer, got {raw}"))?,
                    );
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                _ => {
                    command = arg.to_string();
                }
            }
        }
        if command == "reachable" && node.is_none() {
            return Err("reachable requires --node".to_string());
        }
        Ok(Self {
            database,
            command,
            node,
        })
    }

    pub fn help() -> &'static str {
        "Usage: graphstore [--db memory|PATH] \
         [--command status|graph|seed|seed-random|clear|reachable] [--node ID]\n"
    }
}
