/// Every command the bot understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Help,
    Ping,
    Echo,
    ServerInfo,
    UserInfo,
    Meme,
    JokeEng,
    JokeFr,
    Weather,
    News,
}

impl CommandKind {
    /// Keyword typed after the prefix
    pub fn keyword(&self) -> &'static str {
        match self {
            CommandKind::Help => "help",
            CommandKind::Ping => "ping",
            CommandKind::Echo => "echo",
            CommandKind::ServerInfo => "serverinfo",
            CommandKind::UserInfo => "userinfo",
            CommandKind::Meme => "meme",
            CommandKind::JokeEng => "jokeEng",
            CommandKind::JokeFr => "jokeFr",
            CommandKind::Weather => "weather",
            CommandKind::News => "news",
        }
    }
}

/// Represents a bot command
#[derive(Debug, Clone)]
pub struct Command {
    pub kind: CommandKind,
    pub description: String,
    pub usage: Option<String>,
    /// Reply sent instead of dispatching when the argument is empty
    pub missing_argument_hint: Option<String>,
}

impl Command {
    pub fn new(kind: CommandKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            usage: None,
            missing_argument_hint: None,
        }
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn with_required_argument(mut self, hint: impl Into<String>) -> Self {
        self.missing_argument_hint = Some(hint.into());
        self
    }

    pub fn keyword(&self) -> &'static str {
        self.kind.keyword()
    }

    pub fn requires_argument(&self) -> bool {
        self.missing_argument_hint.is_some()
    }
}

/// A classified command and the text that followed its keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub command: CommandKind,
    pub args: String,
}

impl CommandInvocation {
    pub fn new(command: CommandKind, args: impl Into<String>) -> Self {
        Self {
            command,
            args: args.into(),
        }
    }
}

/// Ordered command table; lookups test entries in insertion order
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bot's full command table for the given prefix
    pub fn standard(prefix: &str) -> Self {
        let mut registry = Self::new();
        registry.register(Command::new(CommandKind::Help, "Affiche ce message."));
        registry.register(Command::new(CommandKind::Ping, "Répond 'Pong!'."));
        registry.register(
            Command::new(CommandKind::Echo, "Répète le message.").with_usage("<message>"),
        );
        registry.register(Command::new(
            CommandKind::ServerInfo,
            "Affiche des informations sur le serveur",
        ));
        registry.register(
            Command::new(
                CommandKind::UserInfo,
                "Fournit des informations sur un utilisateur",
            )
            .with_usage("[@utilisateur]"),
        );
        registry.register(Command::new(CommandKind::Meme, "Envoie un meme aléatoire"));
        registry.register(Command::new(
            CommandKind::JokeEng,
            "Partage une blague aléatoire en anglais",
        ));
        registry.register(Command::new(
            CommandKind::JokeFr,
            "Partage une blague aléatoire en français",
        ));
        registry.register(
            Command::new(
                CommandKind::Weather,
                "Affiche la météo actuelle pour une localisation donnée",
            )
            .with_usage("<lieu>")
            .with_required_argument(format!(
                "Veuillez spécifier un lieu pour obtenir la météo. Exemple: '{}weather Paris'",
                prefix
            )),
        );
        registry.register(Command::new(CommandKind::News, "Affiche les dernières nouvelles"));
        registry
    }

    pub fn register(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn get(&self, kind: CommandKind) -> Option<&Command> {
        self.commands.iter().find(|c| c.kind == kind)
    }

    /// First command whose keyword starts `input`
    pub fn find_prefix<'a>(&self, input: &'a str) -> Option<(&Command, &'a str)> {
        self.commands.iter().find_map(|c| {
            input
                .strip_prefix(c.keyword())
                .map(|rest| (c, rest))
        })
    }

    pub fn all(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }
}
