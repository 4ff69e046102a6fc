//! Shared Tailwind class strings so pages stay visually consistent.

pub const BTN_PRIMARY: &str =
    "rounded-lg bg-amber-500 px-4 py-2 text-sm font-semibold text-slate-950 hover:bg-amber-400";

pub const BTN_ACTIVE: &str = "rounded-lg px-4 py-2 text-sm font-semibold bg-amber-500/20 \
     text-amber-300 border border-amber-500/40";

pub const BTN_INACTIVE: &str = "rounded-lg px-4 py-2 text-sm text-slate-400 border \
     border-slate-700 transition hover:border-amber-600 hover:text-amber-300";

pub const BTN_CLOSED: &str = "rounded-lg px-4 py-2 text-sm font-semibold bg-rose-500/20 \
     text-rose-300 border border-rose-500/40";

pub const INPUT: &str = "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm \
     text-slate-100 focus:border-amber-500 focus:outline-none";

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40";

pub const TABLE_CONTAINER: &str =
    "rounded-xl border border-slate-800 bg-slate-900/40 overflow-hidden";

pub const TABLE_HEADER: &str =
    "border-b border-slate-800 bg-slate-900/60 text-xs uppercase text-slate-500";

pub const TABLE_DIVIDER: &str = "divide-y divide-slate-800";

pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";

pub const TEXT_MUTED: &str = "text-slate-500";

pub const ACCENT_TEXT: &str = "text-amber-400";
