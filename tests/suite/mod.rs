mod frame_loop;
mod rendering;
mod scenarios;
