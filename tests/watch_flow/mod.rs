mod fan_out_case;
mod stop_case;
