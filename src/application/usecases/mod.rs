pub mod set_slack_message;
