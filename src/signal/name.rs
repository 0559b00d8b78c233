//! POSIX signal names accepted on the command line.

use std::fmt;
use std::str::FromStr;

use nix::sys::signal::Signal;
use thiserror::Error;

/// A signal name was not one of the supported POSIX names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown signal \"{0}\"")]
pub struct UnknownSignal(pub String);

/// A POSIX signal, named without the `SIG` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalName {
    Hup,
    Int,
    Quit,
    Ill,
    Trap,
    Abrt,
    /// Historical alias of `ABRT`.
    Iot,
    Bus,
    Fpe,
    Kill,
    Usr1,
    Segv,
    Usr2,
    Pipe,
    Alrm,
    Term,
    Chld,
    Cont,
    Stop,
    Tstp,
    Ttin,
    Ttou,
    Urg,
    Xcpu,
    Xfsz,
    Vtalrm,
    Winch,
    Prof,
    Io,
    Sys,
}

impl SignalName {
    /// Every supported signal, in conventional numbering order.
    pub const ALL: [SignalName; 30] = [
        SignalName::Hup,
        SignalName::Int,
        SignalName::Quit,
        SignalName::Ill,
        SignalName::Trap,
        SignalName::Abrt,
        SignalName::Iot,
        SignalName::Bus,
        SignalName::Fpe,
        SignalName::Kill,
        SignalName::Usr1,
        SignalName::Segv,
        SignalName::Usr2,
        SignalName::Pipe,
        SignalName::Alrm,
        SignalName::Term,
        SignalName::Chld,
        SignalName::Cont,
        SignalName::Stop,
        SignalName::Tstp,
        SignalName::Ttin,
        SignalName::Ttou,
        SignalName::Urg,
        SignalName::Xcpu,
        SignalName::Xfsz,
        SignalName::Vtalrm,
        SignalName::Winch,
        SignalName::Prof,
        SignalName::Io,
        SignalName::Sys,
    ];

    /// The name as written on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            SignalName::Hup => "HUP",
            SignalName::Int => "INT",
            SignalName::Quit => "QUIT",
            SignalName::Ill => "ILL",
            SignalName::Trap => "TRAP",
            SignalName::Abrt => "ABRT",
            SignalName::Iot => "IOT",
            SignalName::Bus => "BUS",
            SignalName::Fpe => "FPE",
            SignalName::Kill => "KILL",
            SignalName::Usr1 => "USR1",
            SignalName::Segv => "SEGV",
            SignalName::Usr2 => "USR2",
            SignalName::Pipe => "PIPE",
            SignalName::Alrm => "ALRM",
            SignalName::Term => "TERM",
            SignalName::Chld => "CHLD",
            SignalName::Cont => "CONT",
            SignalName::Stop => "STOP",
            SignalName::Tstp => "TSTP",
            SignalName::Ttin => "TTIN",
            SignalName::Ttou => "TTOU",
            SignalName::Urg => "URG",
            SignalName::Xcpu => "XCPU",
            SignalName::Xfsz => "XFSZ",
            SignalName::Vtalrm => "VTALRM",
            SignalName::Winch => "WINCH",
            SignalName::Prof => "PROF",
            SignalName::Io => "IO",
            SignalName::Sys => "SYS",
        }
    }

    /// The platform signal this name delivers.
    pub fn to_nix(self) -> Signal {
        match self {
            SignalName::Hup => Signal::SIGHUP,
            SignalName::Int => Signal::SIGINT,
            SignalName::Quit => Signal::SIGQUIT,
            SignalName::Ill => Signal::SIGILL,
            SignalName::Trap => Signal::SIGTRAP,
            SignalName::Abrt | SignalName::Iot => Signal::SIGABRT,
            SignalName::Bus => Signal::SIGBUS,
            SignalName::Fpe => Signal::SIGFPE,
            SignalName::Kill => Signal::SIGKILL,
            SignalName::Usr1 => Signal::SIGUSR1,
            SignalName::Segv => Signal::SIGSEGV,
            SignalName::Usr2 => Signal::SIGUSR2,
            SignalName::Pipe => Signal::SIGPIPE,
            SignalName::Alrm => Signal::SIGALRM,
            SignalName::Term => Signal::SIGTERM,
            SignalName::Chld => Signal::SIGCHLD,
            SignalName::Cont => Signal::SIGCONT,
            SignalName::Stop => Signal::SIGSTOP,
            SignalName::Tstp => Signal::SIGTSTP,
            SignalName::Ttin => Signal::SIGTTIN,
            SignalName::Ttou => Signal::SIGTTOU,
            SignalName::Urg => Signal::SIGURG,
            SignalName::Xcpu => Signal::SIGXCPU,
            SignalName::Xfsz => Signal::SIGXFSZ,
            SignalName::Vtalrm => Signal::SIGVTALRM,
            SignalName::Winch => Signal::SIGWINCH,
            SignalName::Prof => Signal::SIGPROF,
            SignalName::Io => Signal::SIGIO,
            SignalName::Sys => Signal::SIGSYS,
        }
    }

    /// Comma-separated list of accepted names, for help and error text.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(|signal| signal.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for SignalName {
    type Err = UnknownSignal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|signal| signal.as_str() == s)
            .ok_or_else(|| UnknownSignal(s.to_string()))
    }
}

impl fmt::Display for SignalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
