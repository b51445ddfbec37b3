//! Operator command table.
//!
//! Metadata only; execution lives in [`TimerCommands`](super::handler::TimerCommands).
//! Each command keeps the short name used by earlier firmware as an alias.

/// Command metadata (const-initializable, no execution logic).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMeta {
    /// Canonical command name
    pub name: &'static str,

    /// Alternative names accepted by the console
    pub aliases: &'static [&'static str],

    /// Argument synopsis
    pub usage: &'static str,

    /// One-line description (shown in the command list)
    pub description: &'static str,

    /// Long help text (shown by `help <command>`)
    pub help: &'static str,

    /// Minimum number of arguments
    pub min_args: usize,

    /// Maximum number of arguments
    pub max_args: usize,
}

impl CommandMeta {
    /// True if `name` is this command's name or one of its aliases.
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| *alias == name)
    }
}

/// `timebase-init <unit>`
pub const CMD_TIMEBASE_INIT: CommandMeta = CommandMeta {
    name: "timebase-init",
    aliases: &["timerinit"],
    usage: "<unit>",
    description: "Configure and start the hardware timebase",
    help: "unit: 0 or 'us' for microsecond ticks, 1 or 'ms' for millisecond ticks.\r\n\
           Installs the timer dispatcher as the tick handler.",
    min_args: 1,
    max_args: 1,
};

/// `timer-register <timeout> <output> <repeating>`
pub const CMD_TIMER_REGISTER: CommandMeta = CommandMeta {
    name: "timer-register",
    aliases: &["timer"],
    usage: "<timeout> <output> <repeating>",
    description: "Register a virtual timer",
    help: "timeout: number of timebase ticks between fires (> 0).\r\n\
           output: output line toggled each time the timer fires.\r\n\
           repeating: 0 disables the timer after its first fire, 1 rearms it.",
    min_args: 3,
    max_args: 3,
};

/// `timer-disable-all`
pub const CMD_TIMER_DISABLE_ALL: CommandMeta = CommandMeta {
    name: "timer-disable-all",
    aliases: &["timerdisable"],
    usage: "",
    description: "Disable all timers and stop the timebase",
    help: "Drives every timer output inactive, stops the timebase and frees all slots.\r\n\
           Run timebase-init again before registering new timers.",
    min_args: 0,
    max_args: 0,
};

/// `timer-list [start]`
pub const CMD_TIMER_LIST: CommandMeta = CommandMeta {
    name: "timer-list",
    aliases: &["timers"],
    usage: "[start]",
    description: "List registered timers",
    help: "Shows the timebase period and, per slot: elapsed/timeout ticks,\r\n\
           output line, mode and whether the timer is still enabled.\r\n\
           Long listings are paged; 'timer-list <start>' continues at slot <start>.",
    min_args: 0,
    max_args: 1,
};

/// `help [command]`
pub const CMD_HELP: CommandMeta = CommandMeta {
    name: "help",
    aliases: &["?"],
    usage: "[command]",
    description: "List commands or show help for one",
    help: "Without arguments lists every command. With a command name shows its usage.",
    min_args: 0,
    max_args: 1,
};

/// Every console command, in listing order.
pub const COMMANDS: &[&CommandMeta] = &[
    &CMD_TIMEBASE_INIT,
    &CMD_TIMER_REGISTER,
    &CMD_TIMER_DISABLE_ALL,
    &CMD_TIMER_LIST,
    &CMD_HELP,
];

/// Resolve a command by name or alias.
pub fn find_command(name: &str) -> Option<&'static CommandMeta> {
    COMMANDS.iter().copied().find(|cmd| cmd.matches(name))
}
