/// File the demo writes when no output path is configured
pub const DEFAULT_OUTPUT_FILENAME: &str = "MyConstitution.txt";

/// Opening of the US Constitution, written in truncate mode
pub const PREAMBLE: &str = "We the People of the United States, in Order to form a more perfect Union,\n\
establish Justice, insure domestic Tranquility, provide for the common defence,\n\
promote the general Welfare, and secure the Blessings of Liberty to ourselves and our Posterity,\n\
do ordain and establish this Constitution for the United States of America.";

/// Line appended after the preamble
pub const APPENDED_LINE: &str = "This is an appended line.";
