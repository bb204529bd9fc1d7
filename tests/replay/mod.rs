mod drop_commits_from_head_middle_and_tail;
mod history_is_bounded_and_newest_first;
mod replay_demo_script;
mod replay_script_from_stdin;
mod synchronize_interleaved_logs;
